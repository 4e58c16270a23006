//! Domain models for the vet-triage system.

mod diagnosis;
mod intake;
mod pet;
mod resource;
mod severity;
mod vitals;

pub use diagnosis::*;
pub use intake::*;
pub use pet::*;
pub use resource::*;
pub use severity::*;
pub use vitals::*;

use thiserror::Error;

/// A field that failed an entity invariant.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {reason}")]
pub struct InvalidField {
    pub field: &'static str,
    pub reason: String,
}

impl InvalidField {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
