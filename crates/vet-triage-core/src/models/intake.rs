//! Triage intake snapshot.

use serde::{Deserialize, Serialize};

use super::SymptomSeverity;

/// Frozen intake handed to a classifier, one per workflow run.
///
/// References the pet by id; name and species are carried only for display
/// and reference-range lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriageIntake {
    /// Selected pet id
    pub pet_id: String,
    /// Pet display name at submission time
    pub pet_name: String,
    /// Pet species at submission time
    pub species: String,
    /// Reported symptom intensity
    pub severity: SymptomSeverity,
    /// Free-text observation notes
    pub notes: String,
    /// Whether the vitals stream contributes to this run
    pub include_vitals: bool,
    /// Capture timestamp (RFC 3339)
    pub captured_at: String,
}

impl TriageIntake {
    /// Observation notes, if any were written.
    pub fn observation(&self) -> Option<&str> {
        let trimmed = self.notes.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
