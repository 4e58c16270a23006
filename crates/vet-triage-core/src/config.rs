//! Core configuration.
//!
//! Hosts pass configuration as a JSON string; every field has a default so
//! `{}` is a valid document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Scoring parameters for [`crate::classifier::ScoringClassifier`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Share of the vitals score in the composite (0.0 - 1.0)
    pub vitals_weight: f64,
    /// Vitals score used when vitals are excluded or missing
    pub neutral_vitals_score: f64,
    /// Composite at or above which the status is Monitor
    pub monitor_threshold: f64,
    /// Risk weight or composite at or above which the status is Urgent
    pub urgent_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            vitals_weight: 0.5,
            neutral_vitals_score: 0.5,
            monitor_threshold: 0.4,
            urgent_threshold: 0.75,
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("vitals_weight", self.vitals_weight),
            ("neutral_vitals_score", self.neutral_vitals_score),
            ("monitor_threshold", self.monitor_threshold),
            ("urgent_threshold", self.urgent_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be within 0.0-1.0, got {}",
                    name, value
                )));
            }
        }
        if self.monitor_threshold >= self.urgent_threshold {
            return Err(ConfigError::Invalid(
                "monitor_threshold must be below urgent_threshold".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration for a [`crate::VetTriageCore`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CoreConfig {
    pub classifier: ClassifierConfig,
    /// Maximum number of recent analyses kept; unbounded when absent
    pub recent_capacity: Option<usize>,
}

impl CoreConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: CoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.classifier.validate()?;
        if self.recent_capacity == Some(0) {
            return Err(ConfigError::Invalid(
                "recent_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
