//! Symptom severity scale.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::InvalidField;

/// Ordinal symptom intensity captured at intake.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SymptomSeverity {
    None = 0,
    Mild = 1,
    #[default]
    Moderate = 2,
    High = 3,
    Emergency = 4,
}

impl SymptomSeverity {
    /// All levels in ascending order.
    pub const ALL: [SymptomSeverity; 5] = [
        SymptomSeverity::None,
        SymptomSeverity::Mild,
        SymptomSeverity::Moderate,
        SymptomSeverity::High,
        SymptomSeverity::Emergency,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SymptomSeverity::None => "No notable issues",
            SymptomSeverity::Mild => "Mild",
            SymptomSeverity::Moderate => "Moderate",
            SymptomSeverity::High => "High",
            SymptomSeverity::Emergency => "Emergency",
        }
    }

    /// Ordinal value (0-4).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Base risk contributed to the composite score.
    pub fn risk_weight(&self) -> f64 {
        match self {
            SymptomSeverity::None => 0.0,
            SymptomSeverity::Mild => 0.25,
            SymptomSeverity::Moderate => 0.5,
            SymptomSeverity::High => 0.75,
            SymptomSeverity::Emergency => 1.0,
        }
    }
}

impl TryFrom<u8> for SymptomSeverity {
    type Error = InvalidField;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(level as usize)
            .copied()
            .ok_or_else(|| InvalidField::new("severity", format!("level {} is outside 0-4", level)))
    }
}

impl fmt::Display for SymptomSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
