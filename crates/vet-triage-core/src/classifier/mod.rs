//! Diagnosis classifiers.
//!
//! Pipeline: TriageIntake + VitalReadings → Score → Status → Catalog lookup
//!
//! Two implementations share the [`Classifier`] seam:
//! - [`ScoringClassifier`]: blends severity risk with vital deviations
//! - [`SampleClassifier`]: returns a fixed sample result for demos

mod recommendations;
mod sample;
mod scoring;

pub use recommendations::*;
pub use sample::*;
pub use scoring::*;

use thiserror::Error;

use crate::models::{DiagnosticResult, SignalScore, TriageIntake, VitalReading};

/// Classifier errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Invalid intake: {0}")]
    Validation(String),
}

pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Maps a frozen intake and its vitals to a diagnostic result.
pub trait Classifier: Send + Sync {
    fn classify(
        &self,
        intake: &TriageIntake,
        vitals: &[VitalReading],
    ) -> ClassifierResult<DiagnosticResult>;
}

/// Reject intakes that do not reference a pet.
pub(crate) fn check_intake(intake: &TriageIntake) -> ClassifierResult<()> {
    if intake.pet_id.trim().is_empty() {
        return Err(ClassifierError::Validation("no pet selected".into()));
    }
    Ok(())
}

/// Vitals that actually contribute to a run.
pub(crate) fn contributing<'a>(intake: &TriageIntake, vitals: &'a [VitalReading]) -> &'a [VitalReading] {
    if intake.include_vitals {
        vitals
    } else {
        &[]
    }
}

/// One "Key signals" entry per reading.
pub(crate) fn signals_for(vitals: &[VitalReading]) -> Vec<SignalScore> {
    vitals
        .iter()
        .map(|v| SignalScore {
            title: v.name.clone(),
            description: v.details.clone(),
            deviation: v.deviation,
            status: v.badge.clone(),
            badge: v.status,
        })
        .collect()
}
