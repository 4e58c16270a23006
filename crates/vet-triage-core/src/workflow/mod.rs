//! Guided triage workflow.
//!
//! Stages: Intake → Vitals → Summary
//!
//! Navigation between stages is free; nothing is validated until the caller
//! reviews the summary or runs the analysis.

mod engine;

pub use engine::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::roster::RosterError;

/// Workflow errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("Invalid triage input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;

impl From<RosterError> for WorkflowError {
    fn from(e: RosterError) -> Self {
        match e {
            RosterError::Validation(msg) => WorkflowError::Validation(msg),
            RosterError::NotFound(id) => WorkflowError::NotFound(format!("pet {}", id)),
        }
    }
}

impl From<ClassifierError> for WorkflowError {
    fn from(e: ClassifierError) -> Self {
        match e {
            ClassifierError::Validation(msg) => WorkflowError::Validation(msg),
        }
    }
}

/// Workflow stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TriageStage {
    #[default]
    Intake,
    Vitals,
    Summary,
}

impl TriageStage {
    pub const ALL: [TriageStage; 3] = [TriageStage::Intake, TriageStage::Vitals, TriageStage::Summary];

    pub fn label(&self) -> &'static str {
        match self {
            TriageStage::Intake => "Intake",
            TriageStage::Vitals => "Vitals",
            TriageStage::Summary => "Summary",
        }
    }

    /// Position in the stage selector.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
