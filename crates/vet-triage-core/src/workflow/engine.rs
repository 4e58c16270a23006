//! Triage workflow engine.

use tracing::{debug, info, warn};

use crate::classifier::Classifier;
use crate::models::{DiagnosticResult, PetProfile, SymptomSeverity, TriageIntake, VitalReading};
use crate::roster::RosterStore;

use super::{TriageStage, WorkflowError, WorkflowResult};

/// What the "Review & run" card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub pet_id: String,
    pub pet_name: String,
    pub severity: SymptomSeverity,
    pub severity_label: String,
    pub vitals_enabled: bool,
}

/// Progress of one guided triage, owned by the caller.
#[derive(Debug, Clone)]
pub struct TriageWorkflow {
    stage: TriageStage,
    selected_pet: Option<String>,
    severity: SymptomSeverity,
    notes: String,
    include_vitals: bool,
}

impl Default for TriageWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageWorkflow {
    /// Start at Intake with no pet, moderate severity and vitals enabled.
    pub fn new() -> Self {
        Self {
            stage: TriageStage::Intake,
            selected_pet: None,
            severity: SymptomSeverity::default(),
            notes: String::new(),
            include_vitals: true,
        }
    }

    /// Start a workflow with the roster's first pet preselected.
    pub fn with_default_pet(roster: &RosterStore) -> Self {
        let mut workflow = Self::new();
        workflow.select_default_pet(roster);
        workflow
    }

    pub fn stage(&self) -> TriageStage {
        self.stage
    }

    pub fn selected_pet(&self) -> Option<&str> {
        self.selected_pet.as_deref()
    }

    pub fn severity(&self) -> SymptomSeverity {
        self.severity
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn include_vitals(&self) -> bool {
        self.include_vitals
    }

    /// Jump to any stage.
    pub fn set_stage(&mut self, stage: TriageStage) {
        debug!(from = self.stage.label(), to = stage.label(), "stage changed");
        self.stage = stage;
    }

    /// Select the pet to triage. The id must exist in the roster.
    pub fn select_pet(&mut self, id: &str, roster: &RosterStore) -> WorkflowResult<()> {
        let pet = roster.get(id)?;
        debug!(pet_id = %pet.id, "pet selected");
        self.selected_pet = Some(pet.id.clone());
        Ok(())
    }

    /// Select the roster's first pet, if any. Returns whether a pet was selected.
    pub fn select_default_pet(&mut self, roster: &RosterStore) -> bool {
        match roster.first() {
            Some(pet) => {
                self.selected_pet = Some(pet.id.clone());
                true
            }
            None => false,
        }
    }

    /// Set severity from its ordinal (0-4).
    pub fn set_severity(&mut self, level: u8) -> WorkflowResult<()> {
        let severity = SymptomSeverity::try_from(level).map_err(|e| {
            warn!(level, "rejected severity level");
            WorkflowError::Validation(e.to_string())
        })?;
        self.set_severity_level(severity);
        Ok(())
    }

    pub fn set_severity_level(&mut self, severity: SymptomSeverity) {
        debug!(severity = severity.label(), "severity set");
        self.severity = severity;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn set_include_vitals(&mut self, include: bool) {
        debug!(include, "vitals stream toggled");
        self.include_vitals = include;
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Check every upstream field regardless of the current stage.
    pub fn validate(&self, roster: &RosterStore) -> WorkflowResult<()> {
        self.resolve_pet(roster).map(|_| ())
    }

    /// Data for the Summary stage. Runs the full validation pass.
    pub fn review(&self, roster: &RosterStore) -> WorkflowResult<ReviewSummary> {
        let pet = self.resolve_pet(roster)?;
        Ok(ReviewSummary {
            pet_id: pet.id.clone(),
            pet_name: pet.name.clone(),
            severity: self.severity,
            severity_label: self.severity.label().to_string(),
            vitals_enabled: self.include_vitals,
        })
    }

    /// Freeze the current inputs into an intake.
    pub fn snapshot(&self, roster: &RosterStore) -> WorkflowResult<TriageIntake> {
        let pet = self.resolve_pet(roster)?;
        Ok(TriageIntake {
            pet_id: pet.id.clone(),
            pet_name: pet.name.clone(),
            species: pet.species.clone(),
            severity: self.severity,
            notes: self.notes.clone(),
            include_vitals: self.include_vitals,
            captured_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Validate, snapshot and classify. Leaves the workflow and roster untouched.
    pub fn run(
        &self,
        roster: &RosterStore,
        classifier: &dyn Classifier,
        vitals: &[VitalReading],
    ) -> WorkflowResult<DiagnosticResult> {
        let intake = self.snapshot(roster)?;
        let readings: &[VitalReading] = if intake.include_vitals { vitals } else { &[] };

        let result = classifier.classify(&intake, readings)?;
        info!(
            pet_id = %intake.pet_id,
            status = result.status().label(),
            confidence = result.confidence,
            "analysis complete"
        );
        Ok(result)
    }

    fn resolve_pet<'r>(&self, roster: &'r RosterStore) -> WorkflowResult<&'r PetProfile> {
        let id = self.selected_pet.as_deref().ok_or_else(|| {
            warn!("triage submitted without a pet");
            WorkflowError::Validation("no pet selected".into())
        })?;
        roster.find(id).ok_or_else(|| {
            warn!(pet_id = %id, "selected pet no longer in roster");
            WorkflowError::Validation(format!("selected pet {} is not in the roster", id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{SampleClassifier, ScoringClassifier};
    use crate::models::{DiagnosisStatus, VitalKind};

    fn setup_roster() -> RosterStore {
        RosterStore::from_profiles(vec![
            PetProfile::new("Luna", "Canine", 4),
            PetProfile::new("Atlas", "Feline", 7),
        ])
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let workflow = TriageWorkflow::new();
        assert_eq!(workflow.stage(), TriageStage::Intake);
        assert_eq!(workflow.selected_pet(), None);
        assert_eq!(workflow.severity(), SymptomSeverity::Moderate);
        assert!(workflow.include_vitals());
    }

    #[test]
    fn test_default_pet_is_first() {
        let roster = setup_roster();
        let workflow = TriageWorkflow::with_default_pet(&roster);
        assert_eq!(workflow.selected_pet(), Some(roster.list()[0].id.as_str()));
    }

    #[test]
    fn test_select_unknown_pet() {
        let roster = setup_roster();
        let mut workflow = TriageWorkflow::new();
        assert!(matches!(
            workflow.select_pet("missing", &roster),
            Err(WorkflowError::NotFound(_))
        ));
        assert_eq!(workflow.selected_pet(), None);
    }

    #[test]
    fn test_severity_out_of_range() {
        let mut workflow = TriageWorkflow::new();
        assert!(matches!(
            workflow.set_severity(5),
            Err(WorkflowError::Validation(_))
        ));
        assert_eq!(workflow.severity(), SymptomSeverity::Moderate);

        workflow.set_severity(4).unwrap();
        assert_eq!(workflow.severity(), SymptomSeverity::Emergency);
    }

    #[test]
    fn test_free_navigation_with_lazy_validation() {
        let roster = setup_roster();
        let mut workflow = TriageWorkflow::new();

        // Summary can be viewed before intake is complete...
        workflow.set_stage(TriageStage::Summary);
        assert_eq!(workflow.stage(), TriageStage::Summary);

        // ...but reviewing it validates upstream fields.
        assert!(matches!(
            workflow.review(&roster),
            Err(WorkflowError::Validation(_))
        ));

        workflow.set_stage(TriageStage::Intake);
        let atlas = roster.list()[1].id.clone();
        workflow.select_pet(&atlas, &roster).unwrap();
        workflow.set_include_vitals(false);

        let review = workflow.review(&roster).unwrap();
        assert_eq!(review.pet_name, "Atlas");
        assert_eq!(review.severity_label, "Moderate");
        assert!(!review.vitals_enabled);
    }

    #[test]
    fn test_run_without_pet_changes_nothing() {
        let roster = setup_roster();
        let mut workflow = TriageWorkflow::new();
        workflow.set_notes("Lethargic");
        let before = format!("{:?}", workflow);

        let result = workflow.run(&roster, &ScoringClassifier::default(), &[]);
        assert!(matches!(result, Err(WorkflowError::Validation(_))));
        assert_eq!(format!("{:?}", workflow), before);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_run_after_pet_removed() {
        let mut roster = setup_roster();
        let mut workflow = TriageWorkflow::with_default_pet(&roster);
        let id = workflow.selected_pet().unwrap().to_string();
        roster.remove(&id);

        assert!(matches!(
            workflow.run(&roster, &SampleClassifier, &[]),
            Err(WorkflowError::Validation(_))
        ));
    }

    #[test]
    fn test_run_ignores_vitals_when_disabled() {
        let roster = setup_roster();
        let mut workflow = TriageWorkflow::with_default_pet(&roster);
        workflow.set_include_vitals(false);
        workflow.set_severity_level(SymptomSeverity::None);

        let vitals = vec![VitalReading::measure(VitalKind::Temperature, 106.0, "Canine")];
        let result = workflow
            .run(&roster, &ScoringClassifier::default(), &vitals)
            .unwrap();

        assert!(result.signals.is_empty());
        assert_eq!(result.status(), DiagnosisStatus::Stable);
    }

    #[test]
    fn test_snapshot_carries_inputs() {
        let roster = setup_roster();
        let mut workflow = TriageWorkflow::with_default_pet(&roster);
        workflow.set_notes("Coughing at night");
        workflow.set_severity(3).unwrap();

        let intake = workflow.snapshot(&roster).unwrap();
        assert_eq!(intake.pet_name, "Luna");
        assert_eq!(intake.species, "Canine");
        assert_eq!(intake.severity, SymptomSeverity::High);
        assert_eq!(intake.notes, "Coughing at night");
        assert!(intake.include_vitals);
    }

    #[test]
    fn test_reset() {
        let roster = setup_roster();
        let mut workflow = TriageWorkflow::with_default_pet(&roster);
        workflow.set_stage(TriageStage::Vitals);
        workflow.set_notes("x");
        workflow.reset();
        assert_eq!(workflow.stage(), TriageStage::Intake);
        assert_eq!(workflow.selected_pet(), None);
        assert!(workflow.notes().is_empty());
    }

    #[test]
    fn test_stage_indices() {
        assert_eq!(TriageStage::from_index(2), Some(TriageStage::Summary));
        assert_eq!(TriageStage::from_index(3), None);
        assert_eq!(TriageStage::Vitals.index(), 1);
    }
}
