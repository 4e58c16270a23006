//! Diagnosis summaries and classifier results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BadgeStyle;

/// Triage outcome shown on summary cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisStatus {
    Stable,
    Monitor,
    Urgent,
}

impl DiagnosisStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosisStatus::Stable => "Stable",
            DiagnosisStatus::Monitor => "Monitor",
            DiagnosisStatus::Urgent => "Urgent",
        }
    }

    pub fn badge_style(&self) -> BadgeStyle {
        match self {
            DiagnosisStatus::Stable => BadgeStyle::Success,
            DiagnosisStatus::Monitor | DiagnosisStatus::Urgent => BadgeStyle::Warning,
        }
    }
}

/// Summary of one completed analysis. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisSummary {
    /// Unique summary ID
    pub id: String,
    /// Pet display name
    pub pet_name: String,
    /// One-line brief
    pub brief: String,
    /// Display label computed at creation (e.g., "Just now")
    pub timestamp: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Outcome status
    pub status: DiagnosisStatus,
    /// Care recommendations, in display order
    pub notes: Vec<String>,
}

impl DiagnosisSummary {
    /// Create a summary stamped with the current time.
    pub fn new(pet_name: String, brief: String, status: DiagnosisStatus, notes: Vec<String>) -> Self {
        Self::recorded_at(pet_name, brief, status, notes, Utc::now())
    }

    /// Create a summary recorded at a specific time.
    pub fn recorded_at(
        pet_name: String,
        brief: String,
        status: DiagnosisStatus,
        notes: Vec<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            pet_name,
            brief,
            timestamp: relative_label(at, Utc::now()),
            created_at: at.to_rfc3339(),
            status,
            notes,
        }
    }

    /// Recompute the timestamp label relative to `now`.
    pub fn relative_timestamp(&self, now: DateTime<Utc>) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(created) => relative_label(created.with_timezone(&Utc), now),
            Err(_) => self.timestamp.clone(),
        }
    }
}

/// Short relative time label: "Just now", "20 min ago", "1 hr ago", "Yesterday", "Sep 17".
pub fn relative_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{} hr ago", elapsed.num_hours())
    } else if elapsed.num_hours() < 48 {
        "Yesterday".to_string()
    } else {
        at.format("%b %-d").to_string()
    }
}

/// Per-vital contribution shown in the "Key signals" panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalScore {
    pub title: String,
    pub description: String,
    /// Deviation from the reference range (0.0 - 1.0)
    pub deviation: f64,
    /// Badge text
    pub status: String,
    pub badge: BadgeStyle,
}

/// How a composite confidence was produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    /// Severity base risk (0.0 - 1.0)
    pub risk_weight: f64,
    /// Mean vital deviation, or the neutral score
    pub vitals_score: f64,
    /// Whether live vitals contributed
    pub vitals_included: bool,
    /// Share of the vitals score in the blend
    pub vitals_weight: f64,
}

impl ScoreBreakdown {
    /// Blend of risk weight and vitals score, before clamping.
    pub fn weighted_score(&self) -> f64 {
        self.risk_weight * (1.0 - self.vitals_weight) + self.vitals_score * self.vitals_weight
    }
}

/// Classifier output for one intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticResult {
    /// Primary condition label
    pub primary_condition: String,
    /// Confidence (0.0 - 1.0)
    pub confidence: f64,
    pub description: String,
    /// Recommended next steps, in order
    pub next_steps: Vec<String>,
    /// Linked summary recorded in recent analyses
    pub summary: DiagnosisSummary,
    /// Per-vital signals
    pub signals: Vec<SignalScore>,
    pub breakdown: ScoreBreakdown,
}

impl DiagnosticResult {
    /// Confidence as a rounded integer percentage.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub fn status(&self) -> DiagnosisStatus {
        self.summary.status
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
