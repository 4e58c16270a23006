//! Vet-Triage Core Library
//!
//! Local, in-memory core for a guided veterinary triage app.
//!
//! # Architecture
//!
//! ```text
//!   Pet Roster ──select──▶ Triage Workflow (Intake → Vitals → Summary)
//!                                   │
//!                          [lazy validation on review/run]
//!                                   │
//!                           TriageIntake snapshot
//!                                   │
//!                 Vitals stream ──▶ Classifier ──▶ DiagnosticResult
//!                                                      │
//!                                              Recent analyses
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (PetProfile, SymptomSeverity, VitalReading, ...)
//! - [`roster`]: Pet roster store and editor drafts
//! - [`workflow`]: Triage workflow engine
//! - [`classifier`]: Diagnosis classifiers
//! - [`history`]: Recent analyses
//! - [`catalog`]: Static clinical resources and care tips
//! - [`config`]: JSON configuration
//! - [`seed`]: Demo data

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod history;
pub mod models;
pub mod roster;
pub mod seed;
pub mod workflow;

// Re-export commonly used types
pub use catalog::ResourceCatalog;
pub use classifier::{Classifier, SampleClassifier, ScoringClassifier};
pub use config::{ClassifierConfig, CoreConfig};
pub use history::RecentAnalyses;
pub use models::{
    BadgeStyle, DiagnosisStatus, DiagnosisSummary, DiagnosticResult, PetProfile, Resource,
    SymptomSeverity, TriageIntake, VitalKind, VitalReading,
};
pub use roster::{PetEditor, RosterStore};
pub use workflow::{TriageStage, TriageWorkflow};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use tracing::info;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VetTriageError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock error: {0}")]
    LockError(String),
}

impl From<roster::RosterError> for VetTriageError {
    fn from(e: roster::RosterError) -> Self {
        match e {
            roster::RosterError::Validation(msg) => VetTriageError::ValidationError(msg),
            roster::RosterError::NotFound(id) => VetTriageError::NotFound(id),
        }
    }
}

impl From<workflow::WorkflowError> for VetTriageError {
    fn from(e: workflow::WorkflowError) -> Self {
        match e {
            workflow::WorkflowError::Validation(msg) => VetTriageError::ValidationError(msg),
            workflow::WorkflowError::NotFound(msg) => VetTriageError::NotFound(msg),
        }
    }
}

impl From<catalog::CatalogError> for VetTriageError {
    fn from(e: catalog::CatalogError) -> Self {
        match e {
            catalog::CatalogError::NotFound(id) => VetTriageError::NotFound(id),
        }
    }
}

impl From<config::ConfigError> for VetTriageError {
    fn from(e: config::ConfigError) -> Self {
        VetTriageError::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for VetTriageError {
    fn from(e: serde_json::Error) -> Self {
        VetTriageError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for VetTriageError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        VetTriageError::LockError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an empty core. `config_json` overrides scoring and history settings.
#[uniffi::export]
pub fn open_core(config_json: Option<String>) -> Result<Arc<VetTriageCore>, VetTriageError> {
    let config = match config_json {
        Some(json) => CoreConfig::from_json(&json)?,
        None => CoreConfig::default(),
    };
    Ok(Arc::new(VetTriageCore::with_config(config, RosterStore::new())?))
}

/// Create a core seeded with the demo roster and recent analyses.
#[uniffi::export]
pub fn open_demo_core() -> Result<Arc<VetTriageCore>, VetTriageError> {
    let roster = RosterStore::from_profiles(seed::demo_pets())?;
    let core = VetTriageCore::with_config(CoreConfig::default(), roster)?;
    {
        let mut state = core.state.lock()?;
        state.history = seed::demo_recent_analyses();
    }
    Ok(Arc::new(core))
}

// =========================================================================
// Main API Object
// =========================================================================

struct CoreState {
    roster: RosterStore,
    workflow: TriageWorkflow,
    history: RecentAnalyses,
    catalog: ResourceCatalog,
    classifier: Box<dyn Classifier>,
}

impl CoreState {
    fn selected_species(&self) -> String {
        self.workflow
            .selected_pet()
            .and_then(|id| self.roster.find(id))
            .map(|pet| pet.species.clone())
            .unwrap_or_default()
    }
}

/// Thread-safe core wrapper for FFI.
#[derive(uniffi::Object)]
pub struct VetTriageCore {
    state: Mutex<CoreState>,
}

impl VetTriageCore {
    /// Build a core around a roster, preselecting its first pet.
    pub fn with_config(config: CoreConfig, roster: RosterStore) -> Result<Self, VetTriageError> {
        config.validate()?;
        let history = match config.recent_capacity {
            Some(limit) => RecentAnalyses::with_capacity_limit(limit),
            None => RecentAnalyses::new(),
        };
        let classifier = ScoringClassifier::new(config.classifier)?;
        let workflow = TriageWorkflow::with_default_pet(&roster);
        Ok(Self {
            state: Mutex::new(CoreState {
                roster,
                workflow,
                history,
                catalog: ResourceCatalog::builtin(),
                classifier: Box::new(classifier),
            }),
        })
    }

    /// Swap the classifier implementation.
    ///
    /// Intended for UI previews and tests. [`SampleClassifier`] ignores
    /// severity and vitals, so a core running it never reports Urgent.
    pub fn set_classifier(&self, classifier: Box<dyn Classifier>) -> Result<(), VetTriageError> {
        let mut state = self.state.lock()?;
        state.classifier = classifier;
        Ok(())
    }
}

#[uniffi::export]
impl VetTriageCore {
    // =========================================================================
    // Roster Operations
    // =========================================================================

    /// All pets in insertion order.
    pub fn list_pets(&self) -> Result<Vec<FfiPetProfile>, VetTriageError> {
        let state = self.state.lock()?;
        Ok(state.roster.list().iter().cloned().map(Into::into).collect())
    }

    /// Blank profile for the "Add pet" editor.
    pub fn new_pet_draft(&self) -> FfiPetProfile {
        PetProfile::empty().into()
    }

    /// Add a pet from a completed editor draft.
    pub fn add_pet(&self, pet: FfiPetProfile) -> Result<FfiPetProfile, VetTriageError> {
        let mut state = self.state.lock()?;
        let CoreState {
            roster, workflow, ..
        } = &mut *state;
        let profile: PetProfile = pet.into();
        roster.add(profile.clone())?;
        if workflow.selected_pet().is_none() {
            workflow.select_default_pet(roster);
        }
        Ok(profile.into())
    }

    /// Replace a pet's full record.
    pub fn update_pet(&self, pet: FfiPetProfile) -> Result<(), VetTriageError> {
        let mut state = self.state.lock()?;
        state.roster.update(pet.into())?;
        Ok(())
    }

    /// Remove a pet. Returns false if it was not in the roster.
    pub fn remove_pet(&self, id: String) -> Result<bool, VetTriageError> {
        let mut state = self.state.lock()?;
        Ok(state.roster.remove(&id))
    }

    // =========================================================================
    // Workflow Operations
    // =========================================================================

    /// Severity levels for the intake stepper.
    pub fn severity_levels(&self) -> Vec<FfiSeverityLevel> {
        SymptomSeverity::ALL
            .iter()
            .map(|s| FfiSeverityLevel {
                level: s.ordinal(),
                label: s.label().to_string(),
            })
            .collect()
    }

    pub fn select_pet(&self, id: String) -> Result<(), VetTriageError> {
        let mut state = self.state.lock()?;
        let CoreState {
            roster, workflow, ..
        } = &mut *state;
        workflow.select_pet(&id, roster)?;
        Ok(())
    }

    pub fn set_severity(&self, level: u8) -> Result<(), VetTriageError> {
        let mut state = self.state.lock()?;
        state.workflow.set_severity(level)?;
        Ok(())
    }

    pub fn set_notes(&self, notes: String) -> Result<(), VetTriageError> {
        let mut state = self.state.lock()?;
        state.workflow.set_notes(notes);
        Ok(())
    }

    pub fn set_include_vitals(&self, include: bool) -> Result<(), VetTriageError> {
        let mut state = self.state.lock()?;
        state.workflow.set_include_vitals(include);
        Ok(())
    }

    /// Jump to a stage by selector index (0 = Intake, 1 = Vitals, 2 = Summary).
    pub fn set_stage(&self, index: u32) -> Result<(), VetTriageError> {
        let stage = TriageStage::from_index(index as usize).ok_or_else(|| {
            VetTriageError::ValidationError(format!("stage {} is outside 0-2", index))
        })?;
        let mut state = self.state.lock()?;
        state.workflow.set_stage(stage);
        Ok(())
    }

    pub fn current_stage(&self) -> Result<u32, VetTriageError> {
        let state = self.state.lock()?;
        Ok(state.workflow.stage().index() as u32)
    }

    /// Validate all inputs and return the "Review & run" card.
    pub fn review(&self) -> Result<FfiReviewSummary, VetTriageError> {
        let state = self.state.lock()?;
        let review = state.workflow.review(&state.roster)?;
        Ok(FfiReviewSummary {
            pet_id: review.pet_id,
            pet_name: review.pet_name,
            severity: review.severity.ordinal(),
            severity_label: review.severity_label,
            vitals_enabled: review.vitals_enabled,
        })
    }

    /// Measure raw vitals against the selected pet's reference ranges.
    pub fn measure_vitals(
        &self,
        vitals: Vec<FfiVitalInput>,
    ) -> Result<Vec<FfiVitalReading>, VetTriageError> {
        let state = self.state.lock()?;
        let readings = measure(&vitals, &state.selected_species())?;
        Ok(readings.into_iter().map(Into::into).collect())
    }

    /// Run the analysis and record its summary in recent analyses.
    pub fn run_analysis(
        &self,
        vitals: Vec<FfiVitalInput>,
    ) -> Result<FfiDiagnosticResult, VetTriageError> {
        let mut state = self.state.lock()?;
        let readings = measure(&vitals, &state.selected_species())?;
        let result = state
            .workflow
            .run(&state.roster, state.classifier.as_ref(), &readings)?;
        state.history.record(result.summary.clone());
        info!(summary_id = %result.summary.id, "recorded triage result");
        Ok(result.into())
    }

    /// Return the workflow to its initial state, keeping the default pet.
    pub fn reset_workflow(&self) -> Result<(), VetTriageError> {
        let mut state = self.state.lock()?;
        let CoreState {
            roster, workflow, ..
        } = &mut *state;
        workflow.reset();
        workflow.select_default_pet(roster);
        Ok(())
    }

    // =========================================================================
    // History Operations
    // =========================================================================

    /// Recent analyses, most recent first.
    pub fn recent_analyses(&self) -> Result<Vec<FfiDiagnosisSummary>, VetTriageError> {
        let state = self.state.lock()?;
        Ok(state.history.iter().cloned().map(Into::into).collect())
    }

    /// Recent analyses as JSON, with timestamp labels as of now.
    pub fn export_recent_json(&self) -> Result<String, VetTriageError> {
        let state = self.state.lock()?;
        Ok(state.history.to_json(chrono::Utc::now())?)
    }

    // =========================================================================
    // Resource Operations
    // =========================================================================

    pub fn list_resources(&self) -> Result<Vec<FfiResource>, VetTriageError> {
        let state = self.state.lock()?;
        Ok(state.catalog.list().iter().cloned().map(Into::into).collect())
    }

    pub fn get_resource(&self, id: String) -> Result<FfiResource, VetTriageError> {
        let state = self.state.lock()?;
        Ok(state.catalog.get(&id)?.clone().into())
    }

    pub fn search_resources(
        &self,
        query: String,
        limit: u32,
    ) -> Result<Vec<FfiResource>, VetTriageError> {
        let state = self.state.lock()?;
        Ok(state
            .catalog
            .search(&query, limit as usize)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    pub fn featured_tips(&self) -> Result<Vec<FfiCareTip>, VetTriageError> {
        let state = self.state.lock()?;
        Ok(state
            .catalog
            .featured_tips()
            .iter()
            .map(|t| FfiCareTip {
                category: t.category.clone(),
                title: t.title.clone(),
                description: t.description.clone(),
            })
            .collect())
    }
}

fn measure(vitals: &[FfiVitalInput], species: &str) -> Result<Vec<VitalReading>, VetTriageError> {
    vitals
        .iter()
        .map(|input| {
            let kind = VitalKind::parse(&input.kind).ok_or_else(|| {
                VetTriageError::ValidationError(format!("unknown vital '{}'", input.kind))
            })?;
            Ok(VitalReading::measure(kind, input.value, species))
        })
        .collect()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe pet profile.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiPetProfile {
    pub id: String,
    pub name: String,
    pub species: String,
    pub age: u8,
    pub weight: Option<String>,
    pub allergies: String,
    pub notes: Option<String>,
}

impl From<PetProfile> for FfiPetProfile {
    fn from(pet: PetProfile) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            species: pet.species,
            age: pet.age,
            weight: pet.weight,
            allergies: pet.allergies,
            notes: pet.notes,
        }
    }
}

impl From<FfiPetProfile> for PetProfile {
    fn from(pet: FfiPetProfile) -> Self {
        PetProfile {
            id: pet.id,
            name: pet.name,
            species: pet.species,
            age: pet.age,
            weight: pet.weight,
            allergies: pet.allergies,
            notes: pet.notes,
        }
    }
}

/// FFI-safe severity level.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSeverityLevel {
    pub level: u8,
    pub label: String,
}

/// Raw vital from the wearable stream.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVitalInput {
    /// "heart_rate", "respiration" or "temperature"
    pub kind: String,
    pub value: f64,
}

/// FFI-safe vital reading.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVitalReading {
    pub name: String,
    pub value: f64,
    pub details: String,
    pub badge: String,
    pub badge_style: String,
    pub deviation: f64,
}

impl From<VitalReading> for FfiVitalReading {
    fn from(reading: VitalReading) -> Self {
        Self {
            name: reading.name,
            value: reading.value,
            details: reading.details,
            badge: reading.badge,
            badge_style: reading.status.as_str().to_string(),
            deviation: reading.deviation,
        }
    }
}

/// FFI-safe review card.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiReviewSummary {
    pub pet_id: String,
    pub pet_name: String,
    pub severity: u8,
    pub severity_label: String,
    pub vitals_enabled: bool,
}

/// FFI-safe diagnosis summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDiagnosisSummary {
    pub id: String,
    pub pet_name: String,
    pub brief: String,
    pub timestamp: String,
    pub status: String,
    pub badge_style: String,
    pub notes: Vec<String>,
}

impl From<DiagnosisSummary> for FfiDiagnosisSummary {
    fn from(summary: DiagnosisSummary) -> Self {
        let timestamp = summary.relative_timestamp(chrono::Utc::now());
        Self {
            id: summary.id,
            pet_name: summary.pet_name,
            brief: summary.brief,
            timestamp,
            status: summary.status.label().to_string(),
            badge_style: summary.status.badge_style().as_str().to_string(),
            notes: summary.notes,
        }
    }
}

/// FFI-safe key signal.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSignal {
    pub title: String,
    pub description: String,
    pub percentage: u8,
    pub status: String,
    pub badge_style: String,
}

/// FFI-safe diagnostic result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDiagnosticResult {
    pub primary_condition: String,
    pub confidence: f64,
    pub confidence_percent: u8,
    pub description: String,
    pub next_steps: Vec<String>,
    pub summary: FfiDiagnosisSummary,
    pub signals: Vec<FfiSignal>,
}

impl From<DiagnosticResult> for FfiDiagnosticResult {
    fn from(result: DiagnosticResult) -> Self {
        let confidence_percent = result.confidence_percent();
        Self {
            primary_condition: result.primary_condition,
            confidence: result.confidence,
            confidence_percent,
            description: result.description,
            next_steps: result.next_steps,
            summary: result.summary.into(),
            signals: result
                .signals
                .into_iter()
                .map(|s| FfiSignal {
                    title: s.title,
                    description: s.description,
                    percentage: (s.deviation.clamp(0.0, 1.0) * 100.0).round() as u8,
                    status: s.status,
                    badge_style: s.badge.as_str().to_string(),
                })
                .collect(),
        }
    }
}

/// FFI-safe resource.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiResource {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub sections: Vec<FfiResourceSection>,
}

/// FFI-safe resource section.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiResourceSection {
    pub title: String,
    pub points: Vec<String>,
}

impl From<Resource> for FfiResource {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            title: resource.title,
            summary: resource.summary,
            sections: resource
                .sections
                .into_iter()
                .map(|s| FfiResourceSection {
                    title: s.title,
                    points: s.points,
                })
                .collect(),
        }
    }
}

/// FFI-safe care tip.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCareTip {
    pub category: String,
    pub title: String,
    pub description: String,
}
