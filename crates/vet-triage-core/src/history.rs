//! Recent analyses, most recent first.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::DiagnosisSummary;

/// Ordered list of completed analysis summaries.
///
/// Unbounded unless a capacity limit is set, in which case the oldest
/// entries are evicted.
#[derive(Debug, Clone, Default)]
pub struct RecentAnalyses {
    entries: VecDeque<DiagnosisSummary>,
    capacity: Option<usize>,
}

impl RecentAnalyses {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` entries.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: Some(limit.max(1)),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Record a summary as the most recent entry.
    pub fn record(&mut self, summary: DiagnosisSummary) {
        debug!(summary_id = %summary.id, pet = %summary.pet_name, "recorded analysis");
        self.entries.push_front(summary);
        if let Some(limit) = self.capacity {
            self.entries.truncate(limit);
        }
    }

    /// Entries, most recent first.
    pub fn list(&self) -> Vec<DiagnosisSummary> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosisSummary> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&DiagnosisSummary> {
        self.entries.iter().find(|s| s.id == id)
    }

    /// Latest entry for a pet, by display name.
    pub fn latest_for(&self, pet_name: &str) -> Option<&DiagnosisSummary> {
        self.entries.iter().find(|s| s.pet_name == pet_name)
    }

    /// Serialize the entries, relabelling each timestamp relative to `now`.
    pub fn to_json(&self, now: DateTime<Utc>) -> Result<String, serde_json::Error> {
        let entries: Vec<DiagnosisSummary> = self
            .entries
            .iter()
            .map(|summary| DiagnosisSummary {
                timestamp: summary.relative_timestamp(now),
                ..summary.clone()
            })
            .collect();
        serde_json::to_string(&entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiagnosisStatus;
    use chrono::Duration;

    fn make_summary(pet: &str) -> DiagnosisSummary {
        DiagnosisSummary::new(pet.into(), "Brief".into(), DiagnosisStatus::Stable, vec![])
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = RecentAnalyses::new();
        history.record(make_summary("Luna"));
        history.record(make_summary("Atlas"));
        history.record(make_summary("Nova"));

        let names: Vec<String> = history.list().into_iter().map(|s| s.pet_name).collect();
        assert_eq!(names, vec!["Nova", "Atlas", "Luna"]);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut history = RecentAnalyses::new();
        for i in 0..100 {
            history.record(make_summary(&format!("Pet {}", i)));
        }
        assert_eq!(history.len(), 100);
        assert_eq!(history.capacity(), None);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = RecentAnalyses::with_capacity_limit(2);
        history.record(make_summary("Luna"));
        history.record(make_summary("Atlas"));
        history.record(make_summary("Nova"));

        assert_eq!(history.len(), 2);
        assert!(history.latest_for("Luna").is_none());
        assert_eq!(history.list()[0].pet_name, "Nova");
    }

    #[test]
    fn test_get_by_id() {
        let mut history = RecentAnalyses::new();
        let summary = make_summary("Luna");
        let id = summary.id.clone();
        history.record(summary);
        assert_eq!(history.get(&id).map(|s| s.pet_name.as_str()), Some("Luna"));
        assert!(history.get("missing").is_none());
    }

    #[test]
    fn test_json_labels_follow_clock() {
        let mut history = RecentAnalyses::new();
        history.record(make_summary("Luna"));
        assert_eq!(history.list()[0].timestamp, "Just now");

        let json = history.to_json(Utc::now() + Duration::hours(2)).unwrap();
        let exported: Vec<DiagnosisSummary> = serde_json::from_str(&json).unwrap();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].timestamp, "2 hr ago");
        assert_eq!(exported[0].id, history.list()[0].id);
    }
}
