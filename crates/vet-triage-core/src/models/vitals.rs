//! Vital readings and reference ranges.
//!
//! Deviation scale:
//! - 0.0 at the midpoint of the target range
//! - 0.75 at either bound
//! - 0.75 - 1.0 beyond the bound, saturating at `margin` past it

use serde::{Deserialize, Serialize};

/// Deviation assigned when a reading carries no usable signal.
pub const NEUTRAL_DEVIATION: f64 = 0.5;

/// Deviation at the edge of the target range.
const BOUNDARY_DEVIATION: f64 = 0.75;

/// Display style of a status badge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    Success,
    Warning,
    Info,
}

impl BadgeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Success => "success",
            BadgeStyle::Warning => "warning",
            BadgeStyle::Info => "info",
        }
    }
}

/// Physiological measurement captured from the vitals stream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    Respiration,
    Temperature,
}

impl VitalKind {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            VitalKind::HeartRate => "Heart rate",
            VitalKind::Respiration => "Respiration",
            VitalKind::Temperature => "Temperature",
        }
    }

    /// Display unit.
    pub fn unit(&self) -> &'static str {
        match self {
            VitalKind::HeartRate => "BPM",
            VitalKind::Respiration => "RPM",
            VitalKind::Temperature => "°F",
        }
    }

    /// Parse a kind from a loose name ("heart_rate", "Heart rate", "hr", ...).
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "heartrate" | "hr" | "pulse" => Some(VitalKind::HeartRate),
            "respiration" | "respiratoryrate" | "rr" => Some(VitalKind::Respiration),
            "temperature" | "temp" => Some(VitalKind::Temperature),
            _ => None,
        }
    }

    fn format_value(&self, value: f64) -> String {
        match self {
            VitalKind::Temperature => format!("{:.1}{}", value, self.unit()),
            _ => format!("{:.0} {}", value, self.unit()),
        }
    }
}

/// Broad species group used to pick reference ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesGroup {
    Canine,
    Feline,
    Other,
}

impl SpeciesGroup {
    /// Classify a free-text species (case-insensitive, common synonyms).
    pub fn from_species(species: &str) -> Self {
        match species.trim().to_lowercase().as_str() {
            "canine" | "dog" | "puppy" => SpeciesGroup::Canine,
            "feline" | "cat" | "kitten" => SpeciesGroup::Feline,
            _ => SpeciesGroup::Other,
        }
    }
}

/// Target range for a vital at rest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReferenceRange {
    /// Lower bound of the target range
    pub low: f64,
    /// Upper bound of the target range
    pub high: f64,
    /// Distance past a bound at which deviation saturates
    pub margin: f64,
}

impl ReferenceRange {
    pub const fn new(low: f64, high: f64, margin: f64) -> Self {
        Self { low, high, margin }
    }

    /// Reference range for a vital and species. Unknown species use the canine table.
    pub fn for_species(kind: VitalKind, species: &str) -> Self {
        match (SpeciesGroup::from_species(species), kind) {
            (SpeciesGroup::Feline, VitalKind::HeartRate) => Self::new(140.0, 200.0, 60.0),
            (SpeciesGroup::Feline, VitalKind::Respiration) => Self::new(20.0, 30.0, 20.0),
            (SpeciesGroup::Feline, VitalKind::Temperature) => Self::new(100.5, 102.5, 3.0),
            (_, VitalKind::HeartRate) => Self::new(60.0, 90.0, 40.0),
            (_, VitalKind::Respiration) => Self::new(10.0, 30.0, 20.0),
            (_, VitalKind::Temperature) => Self::new(100.5, 102.0, 3.0),
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Signed distance outside the range (positive above, negative below, 0 inside).
    pub fn excess(&self, value: f64) -> f64 {
        if value > self.high {
            value - self.high
        } else if value < self.low {
            value - self.low
        } else {
            0.0
        }
    }

    /// Deviation score in [0, 1].
    pub fn deviation(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return NEUTRAL_DEVIATION;
        }
        let half_width = (self.high - self.low) / 2.0;
        let score = if self.contains(value) {
            if half_width <= f64::EPSILON {
                0.0
            } else {
                BOUNDARY_DEVIATION * (value - self.midpoint()).abs() / half_width
            }
        } else {
            let over = self.excess(value).abs();
            let ratio = if self.margin <= f64::EPSILON {
                1.0
            } else {
                (over / self.margin).min(1.0)
            };
            BOUNDARY_DEVIATION + (1.0 - BOUNDARY_DEVIATION) * ratio
        };
        score.clamp(0.0, 1.0)
    }
}

/// A single vital reading with its derived badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalReading {
    pub kind: VitalKind,
    /// Display name (e.g., "Heart rate")
    pub name: String,
    /// Measured value in the kind's unit
    pub value: f64,
    /// Free-text details, e.g. "92 BPM · Slightly elevated"
    pub details: String,
    /// Badge text, e.g. "+2%", "Stable", "Alert"
    pub badge: String,
    /// Badge style
    pub status: BadgeStyle,
    /// Distance from the reference range (0.0 - 1.0)
    pub deviation: f64,
}

impl VitalReading {
    /// Measure a value against the species' reference range.
    pub fn measure(kind: VitalKind, value: f64, species: &str) -> Self {
        let range = ReferenceRange::for_species(kind, species);

        if !value.is_finite() {
            return Self {
                kind,
                name: kind.name().to_string(),
                value,
                details: "No signal".to_string(),
                badge: "No signal".to_string(),
                status: BadgeStyle::Info,
                deviation: NEUTRAL_DEVIATION,
            };
        }

        let deviation = range.deviation(value);
        let excess = range.excess(value);

        let (trend, badge, status) = if excess == 0.0 {
            ("Within target".to_string(), "Stable".to_string(), BadgeStyle::Success)
        } else {
            let slight = excess.abs() < range.margin / 2.0;
            let trend = match (excess > 0.0, slight) {
                (true, true) => "Slightly elevated",
                (true, false) => "Elevated",
                (false, true) => "Slightly low",
                (false, false) => "Low",
            };
            let bound = if excess > 0.0 { range.high } else { range.low };
            let percent = (excess / bound * 100.0).round();
            let badge = if slight && percent.abs() >= 1.0 {
                format!("{:+}%", percent as i64)
            } else {
                "Alert".to_string()
            };
            (trend.to_string(), badge, BadgeStyle::Warning)
        };

        Self {
            kind,
            name: kind.name().to_string(),
            value,
            details: format!("{} · {}", kind.format_value(value), trend),
            badge,
            status,
            deviation,
        }
    }

    /// Whether the reading falls outside its target range.
    pub fn is_abnormal(&self) -> bool {
        self.status == BadgeStyle::Warning
    }
}
