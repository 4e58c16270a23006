//! Fixed recommendation catalog keyed by status.

use crate::models::DiagnosisStatus;

/// Next steps shown on the result card.
pub fn next_steps(status: DiagnosisStatus) -> &'static [&'static str] {
    match status {
        DiagnosisStatus::Stable => &[
            "Continue routine monitoring at home.",
            "Log any new symptoms in the app.",
            "Schedule a wellness check within two weeks.",
        ],
        DiagnosisStatus::Monitor => &[
            "Schedule in-clinic follow-up within 24 hours.",
            "Re-run vitals after rest to confirm the trend.",
            "Flag case for manual specialist review.",
        ],
        DiagnosisStatus::Urgent => &[
            "Bring the patient in for an in-clinic exam today.",
            "Flag case for manual specialist review.",
            "Share emergency triggers with the caregiver.",
        ],
    }
}

/// Care recommendations recorded on the summary.
pub fn care_notes(status: DiagnosisStatus) -> &'static [&'static str] {
    match status {
        DiagnosisStatus::Stable => &[
            "Continue monitoring at-home care plan",
            "Schedule follow-up in 48 hours",
        ],
        DiagnosisStatus::Monitor => &[
            "Re-check vitals within 12 hours",
            "Flag recurrence for deeper scan",
        ],
        DiagnosisStatus::Urgent => &[
            "Re-run vitals in clinic",
            "Consider anti-inflammatory protocol",
        ],
    }
}
