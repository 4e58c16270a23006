//! Static clinical resource library.
//!
//! Read-only: resources are loaded once and never mutated.

use strsim::jaro_winkler;
use thiserror::Error;

use crate::models::{CareTip, Resource, ResourceSection};

/// Minimum similarity for a fuzzy search hit.
const MIN_SIMILARITY: f64 = 0.75;

/// Catalog errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Resource not found: {0}")]
    NotFound(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// In-memory lookup of guideline documents and care tips.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
    tips: Vec<CareTip>,
}

impl ResourceCatalog {
    /// Create a catalog from resources and tips.
    pub fn new(resources: Vec<Resource>, tips: Vec<CareTip>) -> Self {
        Self { resources, tips }
    }

    /// Catalog with the built-in guidelines and featured tips.
    pub fn builtin() -> Self {
        Self::new(builtin_resources(), builtin_tips())
    }

    /// All resources in display order.
    pub fn list(&self) -> &[Resource] {
        &self.resources
    }

    /// Get a resource by id.
    pub fn get(&self, id: &str) -> CatalogResult<&Resource> {
        self.resources
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Search titles and summaries, best match first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Resource> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.resources.iter().take(limit).collect();
        }

        let mut scored: Vec<(f64, &Resource)> = self
            .resources
            .iter()
            .map(|r| (score_resource(r, &query), r))
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(limit).map(|(_, r)| r).collect()
    }

    /// Tips featured on the home screen.
    pub fn featured_tips(&self) -> &[CareTip] {
        &self.tips
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Substring hits score 1.0; otherwise the best per-word Jaro-Winkler similarity.
fn score_resource(resource: &Resource, query: &str) -> f64 {
    let title = resource.title.to_lowercase();
    let summary = resource.summary.to_lowercase();
    if title.contains(query) || summary.contains(query) {
        return 1.0;
    }

    let whole = jaro_winkler(query, &title);
    let best_word = title
        .split_whitespace()
        .chain(summary.split_whitespace())
        .map(|word| jaro_winkler(query, word.trim_matches(|c: char| !c.is_alphanumeric())))
        .fold(0.0_f64, f64::max);

    whole.max(best_word)
}

fn builtin_resources() -> Vec<Resource> {
    vec![
        Resource::new(
            "Post-operative respiratory care",
            "Checklist for supporting patients after airway procedures.",
            vec![
                ResourceSection::new(
                    "Immediate care",
                    &[
                        "Monitor respiratory effort every 15 minutes for the first hour.",
                        "Provide humidified oxygen if saturation drops below 94%.",
                    ],
                ),
                ResourceSection::new(
                    "At-home guidance",
                    &[
                        "Share step-down steroid tapering schedule with caregivers.",
                        "Provide emergency triggers that should prompt clinic contact.",
                    ],
                ),
            ],
        ),
        Resource::new(
            "GI distress stabilization",
            "Evidence-based interventions for acute gastrointestinal flare-ups.",
            vec![
                ResourceSection::new(
                    "Intake considerations",
                    &[
                        "Recommend bland diet transition over 12 hours.",
                        "Encourage small, frequent hydration intervals.",
                    ],
                ),
                ResourceSection::new(
                    "Follow-up",
                    &[
                        "Schedule recheck if symptoms persist beyond 24 hours.",
                        "Collect stool sample for lab analysis if bleeding occurs.",
                    ],
                ),
            ],
        ),
    ]
}

fn builtin_tips() -> Vec<CareTip> {
    [
        (
            "Hydration",
            "Monitor fluid intake",
            "Encourage regular hydration post-treatment to support renal function and avoid dehydration.",
        ),
        (
            "Mobility",
            "Gradual exercise",
            "Plan two short leash walks with light stretching to rebuild muscle without overexertion.",
        ),
        (
            "Nutrition",
            "High-protein snacks",
            "Offer small, protein-rich snacks spaced throughout the day to maintain energy between meals.",
        ),
    ]
    .into_iter()
    .map(|(category, title, description)| CareTip {
        category: category.into(),
        title: title.into(),
        description: description.into(),
    })
    .collect()
}
