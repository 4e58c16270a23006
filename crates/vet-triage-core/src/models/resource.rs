//! Clinical resource models.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A clinical guideline document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    /// Stable id derived from the title
    pub id: String,
    pub title: String,
    pub summary: String,
    pub sections: Vec<ResourceSection>,
}

/// A titled list of guideline points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceSection {
    pub title: String,
    pub points: Vec<String>,
}

impl Resource {
    /// Create a resource; the id is derived from the title so it is stable across loads.
    pub fn new(title: &str, summary: &str, sections: Vec<ResourceSection>) -> Self {
        Self {
            id: resource_id(title),
            title: title.to_string(),
            summary: summary.to_string(),
            sections,
        }
    }

    /// Total number of guideline points across sections.
    pub fn point_count(&self) -> usize {
        self.sections.iter().map(|s| s.points.len()).sum()
    }
}

impl ResourceSection {
    pub fn new(title: &str, points: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A short care tip featured on the home screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareTip {
    pub category: String,
    pub title: String,
    pub description: String,
}

/// First 16 hex chars of SHA-256 over the title.
pub fn resource_id(title: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_stable() {
        let a = resource_id("GI distress stabilization");
        let b = resource_id("GI distress stabilization");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert_ne!(a, resource_id("Post-operative respiratory care"));
    }

    #[test]
    fn test_point_count() {
        let resource = Resource::new(
            "Test",
            "Summary",
            vec![
                ResourceSection::new("A", &["one", "two"]),
                ResourceSection::new("B", &["three"]),
            ],
        );
        assert_eq!(resource.point_count(), 3);
        assert_eq!(resource.id, resource_id("Test"));
    }
}
