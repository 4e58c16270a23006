//! Composite scoring classifier.
//!
//! composite = risk_weight × (1 − w) + vitals_score × w, clamped to [0, 1]
//!
//! Status thresholds (defaults):
//! - Urgent: risk_weight ≥ 0.75 or composite ≥ 0.75
//! - Monitor: composite ≥ 0.4
//! - Stable: otherwise

use tracing::debug;

use crate::config::{ClassifierConfig, ConfigResult};
use crate::models::{
    DiagnosisStatus, DiagnosisSummary, DiagnosticResult, ScoreBreakdown, SymptomSeverity,
    TriageIntake, VitalKind, VitalReading,
};

use super::{care_notes, check_intake, contributing, next_steps, signals_for};
use super::{Classifier, ClassifierResult};

/// Classifier that blends severity risk with vital deviations.
#[derive(Debug, Clone, Default)]
pub struct ScoringClassifier {
    config: ClassifierConfig,
}

impl ScoringClassifier {
    /// Create a classifier, rejecting out-of-range weights and thresholds.
    pub fn new(config: ClassifierConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Score the intake without building a result.
    pub fn score(&self, intake: &TriageIntake, vitals: &[VitalReading]) -> ScoreBreakdown {
        let readings = contributing(intake, vitals);
        let vitals_score = if readings.is_empty() {
            self.config.neutral_vitals_score
        } else {
            let total: f64 = readings.iter().map(|v| v.deviation.clamp(0.0, 1.0)).sum();
            total / readings.len() as f64
        };

        ScoreBreakdown {
            risk_weight: intake.severity.risk_weight(),
            vitals_score,
            vitals_included: !readings.is_empty(),
            vitals_weight: self.config.vitals_weight,
        }
    }

    /// Map a breakdown to a status.
    pub fn status_for(&self, breakdown: &ScoreBreakdown, confidence: f64) -> DiagnosisStatus {
        if breakdown.risk_weight >= self.config.urgent_threshold
            || confidence >= self.config.urgent_threshold
        {
            DiagnosisStatus::Urgent
        } else if confidence >= self.config.monitor_threshold {
            DiagnosisStatus::Monitor
        } else {
            DiagnosisStatus::Stable
        }
    }
}

impl Classifier for ScoringClassifier {
    fn classify(
        &self,
        intake: &TriageIntake,
        vitals: &[VitalReading],
    ) -> ClassifierResult<DiagnosticResult> {
        check_intake(intake)?;

        let readings = contributing(intake, vitals);
        let breakdown = self.score(intake, vitals);
        let weighted = breakdown.weighted_score();
        let confidence = if weighted.is_finite() {
            weighted.clamp(0.0, 1.0)
        } else {
            self.config.neutral_vitals_score.clamp(0.0, 1.0)
        };
        let status = self.status_for(&breakdown, confidence);

        let lead = leading_abnormal(readings);
        let primary_condition = match lead {
            Some(reading) => condition_for(reading.kind).to_string(),
            None => match intake.severity {
                SymptomSeverity::None | SymptomSeverity::Mild => "No acute findings".to_string(),
                _ => "Symptomatic presentation".to_string(),
            },
        };

        let brief = match lead {
            Some(reading) => format!("{} outside target range ({}).", reading.name, reading.details),
            None if intake.severity == SymptomSeverity::None => {
                "No notable issues detected.".to_string()
            }
            None => format!("{} symptoms reported.", intake.severity.label()),
        };

        let mut notes: Vec<String> = care_notes(status).iter().map(|n| n.to_string()).collect();
        if let Some(observation) = intake.observation() {
            notes.push(format!("Owner observations: {}", observation));
        }

        debug!(
            pet_id = %intake.pet_id,
            risk = breakdown.risk_weight,
            vitals_score = breakdown.vitals_score,
            confidence,
            status = status.label(),
            "scored intake"
        );

        Ok(DiagnosticResult {
            primary_condition,
            confidence,
            description: describe(intake, readings),
            next_steps: next_steps(status).iter().map(|s| s.to_string()).collect(),
            summary: DiagnosisSummary::new(intake.pet_name.clone(), brief, status, notes),
            signals: signals_for(readings),
            breakdown,
        })
    }
}

/// Most deviant out-of-range reading.
fn leading_abnormal(readings: &[VitalReading]) -> Option<&VitalReading> {
    readings
        .iter()
        .filter(|v| v.is_abnormal())
        .max_by(|a, b| a.deviation.partial_cmp(&b.deviation).unwrap_or(std::cmp::Ordering::Equal))
}

fn condition_for(kind: VitalKind) -> &'static str {
    match kind {
        VitalKind::Temperature => "Febrile response",
        VitalKind::HeartRate => "Elevated cardiac stress",
        VitalKind::Respiration => "Upper respiratory inflammation",
    }
}

fn describe(intake: &TriageIntake, readings: &[VitalReading]) -> String {
    let symptoms = match intake.severity {
        SymptomSeverity::None => "No notable symptoms reported.".to_string(),
        level => format!("{} symptoms reported.", level.label()),
    };

    let vitals = if !intake.include_vitals {
        "Vitals stream excluded; a neutral vitals weight was applied.".to_string()
    } else if readings.is_empty() {
        "No vitals received; a neutral vitals weight was applied.".to_string()
    } else {
        let abnormal: Vec<String> = readings
            .iter()
            .filter(|v| v.is_abnormal())
            .map(|v| format!("{} ({})", v.name.to_lowercase(), v.details))
            .collect();
        if abnormal.is_empty() {
            "All vitals within target ranges.".to_string()
        } else {
            format!("Out-of-range vitals: {}.", abnormal.join(", "))
        }
    };

    format!("{} {}", symptoms, vitals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifierError;
    use crate::config::ConfigError;

    fn make_intake(severity: SymptomSeverity, include_vitals: bool) -> TriageIntake {
        TriageIntake {
            pet_id: "pet-1".into(),
            pet_name: "Luna".into(),
            species: "Canine".into(),
            severity,
            notes: String::new(),
            include_vitals,
            captured_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    fn luna_vitals() -> Vec<VitalReading> {
        vec![
            VitalReading::measure(VitalKind::HeartRate, 92.0, "Canine"),
            VitalReading::measure(VitalKind::Respiration, 26.0, "Canine"),
            VitalReading::measure(VitalKind::Temperature, 102.1, "Canine"),
        ]
    }

    fn normal_vitals() -> Vec<VitalReading> {
        vec![
            VitalReading::measure(VitalKind::HeartRate, 75.0, "Canine"),
            VitalReading::measure(VitalKind::Respiration, 20.0, "Canine"),
            VitalReading::measure(VitalKind::Temperature, 101.25, "Canine"),
        ]
    }

    #[test]
    fn test_moderate_with_elevated_vitals() {
        let classifier = ScoringClassifier::default();
        let result = classifier
            .classify(&make_intake(SymptomSeverity::Moderate, true), &luna_vitals())
            .unwrap();

        assert!(result.confidence >= 0.5);
        assert_eq!(result.status(), DiagnosisStatus::Monitor);
        assert_eq!(result.primary_condition, "Elevated cardiac stress");
        assert_eq!(result.signals.len(), 3);
        assert!(result.breakdown.vitals_included);
        assert!(result.description.contains("Out-of-range vitals"));
    }

    #[test]
    fn test_emergency_is_always_urgent() {
        let classifier = ScoringClassifier::default();
        for vitals in [vec![], normal_vitals(), luna_vitals()] {
            let result = classifier
                .classify(&make_intake(SymptomSeverity::Emergency, true), &vitals)
                .unwrap();
            assert_eq!(result.status(), DiagnosisStatus::Urgent);
        }
    }

    #[test]
    fn test_none_with_normal_vitals_is_stable() {
        let classifier = ScoringClassifier::default();
        let result = classifier
            .classify(&make_intake(SymptomSeverity::None, true), &normal_vitals())
            .unwrap();

        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.status(), DiagnosisStatus::Stable);
        assert_eq!(result.primary_condition, "No acute findings");
        assert_eq!(result.summary.brief, "No notable issues detected.");
    }

    #[test]
    fn test_excluded_vitals_use_neutral_score() {
        let classifier = ScoringClassifier::default();
        let result = classifier
            .classify(&make_intake(SymptomSeverity::Mild, false), &luna_vitals())
            .unwrap();

        assert!(!result.breakdown.vitals_included);
        assert_eq!(result.breakdown.vitals_score, 0.5);
        assert!((result.confidence - 0.375).abs() < 1e-9);
        assert_eq!(result.status(), DiagnosisStatus::Stable);
        assert!(result.signals.is_empty());
        assert!(result.description.contains("excluded"));
    }

    #[test]
    fn test_missing_vitals_degrade_to_neutral() {
        let classifier = ScoringClassifier::default();
        let result = classifier
            .classify(&make_intake(SymptomSeverity::Moderate, true), &[])
            .unwrap();
        assert_eq!(result.breakdown.vitals_score, 0.5);
        assert_eq!(result.status(), DiagnosisStatus::Monitor);
    }

    #[test]
    fn test_blend_ratio_is_configurable() {
        let classifier = ScoringClassifier::new(ClassifierConfig {
            vitals_weight: 0.0,
            ..ClassifierConfig::default()
        })
        .unwrap();
        let result = classifier
            .classify(&make_intake(SymptomSeverity::Mild, true), &luna_vitals())
            .unwrap();
        assert_eq!(result.confidence, 0.25);
        assert_eq!(result.status(), DiagnosisStatus::Stable);
    }

    #[test]
    fn test_observation_notes_appended() {
        let classifier = ScoringClassifier::default();
        let mut intake = make_intake(SymptomSeverity::Mild, true);
        intake.notes = "  Coughing after walks ".into();

        let result = classifier.classify(&intake, &normal_vitals()).unwrap();
        assert_eq!(
            result.summary.notes.last().map(String::as_str),
            Some("Owner observations: Coughing after walks")
        );
    }

    #[test]
    fn test_unselected_pet_fails() {
        let classifier = ScoringClassifier::default();
        let mut intake = make_intake(SymptomSeverity::Mild, true);
        intake.pet_id.clear();
        assert!(matches!(
            classifier.classify(&intake, &[]),
            Err(ClassifierError::Validation(_))
        ));
    }

    #[test]
    fn test_out_of_range_config_rejected() {
        let result = ScoringClassifier::new(ClassifierConfig {
            urgent_threshold: 1.5,
            ..ClassifierConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = ScoringClassifier::new(ClassifierConfig {
            neutral_vitals_score: f64::NAN,
            ..ClassifierConfig::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_emergency_urgent_at_strictest_threshold() {
        let classifier = ScoringClassifier::new(ClassifierConfig {
            monitor_threshold: 0.9,
            urgent_threshold: 1.0,
            ..ClassifierConfig::default()
        })
        .unwrap();
        let result = classifier
            .classify(&make_intake(SymptomSeverity::Emergency, false), &[])
            .unwrap();
        assert_eq!(result.status(), DiagnosisStatus::Urgent);
    }
}
