//! Fixed sample classifier for demos and UI previews.

use crate::models::{
    DiagnosisStatus, DiagnosisSummary, DiagnosticResult, ScoreBreakdown, TriageIntake,
    VitalReading,
};

use super::{check_intake, contributing, signals_for};
use super::{Classifier, ClassifierResult};

const SAMPLE_CONFIDENCE: f64 = 0.78;

/// Returns the same preliminary result for every intake, addressed to the selected pet.
///
/// Preview only: the status is always Stable, even for emergency intakes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleClassifier;

impl Classifier for SampleClassifier {
    fn classify(
        &self,
        intake: &TriageIntake,
        vitals: &[VitalReading],
    ) -> ClassifierResult<DiagnosticResult> {
        check_intake(intake)?;
        let readings = contributing(intake, vitals);

        Ok(DiagnosticResult {
            primary_condition: "Upper respiratory inflammation".into(),
            confidence: SAMPLE_CONFIDENCE,
            description: "AI detected consistent bronchial inflammation patterns similar to \
                          previous cases with positive steroid response."
                .into(),
            next_steps: vec![
                "Schedule in-clinic follow-up within 24 hours.".into(),
                "Share inhaler usage plan with caregiver via the app.".into(),
                "Flag case for manual specialist review.".into(),
            ],
            summary: DiagnosisSummary::new(
                intake.pet_name.clone(),
                "Respiratory rate normalized after bronchodilator therapy.".into(),
                DiagnosisStatus::Stable,
                vec![
                    "Continue monitoring at-home inhaler usage".into(),
                    "Schedule follow-up in 48 hours".into(),
                ],
            ),
            signals: signals_for(readings),
            breakdown: ScoreBreakdown {
                risk_weight: intake.severity.risk_weight(),
                vitals_score: SAMPLE_CONFIDENCE,
                vitals_included: !readings.is_empty(),
                vitals_weight: 1.0,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SymptomSeverity;

    #[test]
    fn test_sample_result() {
        let intake = TriageIntake {
            pet_id: "pet-1".into(),
            pet_name: "Atlas".into(),
            species: "Feline".into(),
            severity: SymptomSeverity::High,
            notes: String::new(),
            include_vitals: false,
            captured_at: chrono::Utc::now().to_rfc3339(),
        };

        let result = SampleClassifier.classify(&intake, &[]).unwrap();
        assert_eq!(result.confidence_percent(), 78);
        assert_eq!(result.next_steps.len(), 3);
        assert_eq!(result.summary.pet_name, "Atlas");
        assert_eq!(result.status(), DiagnosisStatus::Stable);
        assert_eq!(result.breakdown.weighted_score(), SAMPLE_CONFIDENCE);
    }
}
