//! Pet roster store.
//!
//! The store owns the canonical list of profiles. Every mutation validates
//! first and then applies a single in-place change, so a reader never sees a
//! half-applied update. Callers that share the store across threads wrap it
//! in a `Mutex` (see [`crate::VetTriageCore`]).

mod editor;

pub use editor::*;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::PetProfile;

/// Roster errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("Invalid pet profile: {0}")]
    Validation(String),

    #[error("Pet not found: {0}")]
    NotFound(String),
}

pub type RosterResult<T> = Result<T, RosterError>;

/// In-memory list of pet profiles, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    pets: Vec<PetProfile>,
}

impl RosterStore {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from existing profiles, validating each one.
    pub fn from_profiles(profiles: Vec<PetProfile>) -> RosterResult<Self> {
        let mut roster = Self::new();
        for profile in profiles {
            roster.add(profile)?;
        }
        Ok(roster)
    }

    /// All profiles in insertion order.
    pub fn list(&self) -> &[PetProfile] {
        &self.pets
    }

    /// Get a profile by id.
    pub fn get(&self, id: &str) -> RosterResult<&PetProfile> {
        self.find(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    /// Look up a profile by id.
    pub fn find(&self, id: &str) -> Option<&PetProfile> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// First profile, used as the default triage selection.
    pub fn first(&self) -> Option<&PetProfile> {
        self.pets.first()
    }

    /// Search profiles by name (case-insensitive prefix match).
    pub fn search(&self, query: &str, limit: usize) -> Vec<&PetProfile> {
        let needle = query.trim().to_lowercase();
        self.pets
            .iter()
            .filter(|p| p.name.to_lowercase().starts_with(&needle))
            .take(limit)
            .collect()
    }

    /// Append a new profile.
    pub fn add(&mut self, profile: PetProfile) -> RosterResult<()> {
        if let Err(e) = profile.validate() {
            warn!(pet_id = %profile.id, error = %e, "rejected new pet profile");
            return Err(RosterError::Validation(e.to_string()));
        }
        if self.contains(&profile.id) {
            warn!(pet_id = %profile.id, "rejected duplicate pet id");
            return Err(RosterError::Validation(format!(
                "id {} already exists",
                profile.id
            )));
        }

        info!(pet_id = %profile.id, name = %profile.name, "added pet");
        self.pets.push(profile);
        Ok(())
    }

    /// Replace the profile whose id matches.
    pub fn update(&mut self, profile: PetProfile) -> RosterResult<()> {
        let index = self
            .pets
            .iter()
            .position(|p| p.id == profile.id)
            .ok_or_else(|| RosterError::NotFound(profile.id.clone()))?;

        if let Err(e) = profile.validate() {
            warn!(pet_id = %profile.id, error = %e, "rejected pet update");
            return Err(RosterError::Validation(e.to_string()));
        }

        info!(pet_id = %profile.id, name = %profile.name, "updated pet");
        self.pets[index] = profile;
        Ok(())
    }

    /// Remove a profile. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.pets.len();
        self.pets.retain(|p| p.id != id);
        let removed = self.pets.len() != before;
        if removed {
            info!(pet_id = %id, "removed pet");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_roster() -> RosterStore {
        RosterStore::from_profiles(vec![
            PetProfile::new("Luna", "Canine", 4),
            PetProfile::new("Atlas", "Feline", 7),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let mut roster = RosterStore::new();
        let pet = PetProfile::new("Nova", "Canine", 2);
        roster.add(pet.clone()).unwrap();

        assert_eq!(roster.list(), &[pet]);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut roster = setup_roster();
        roster.add(PetProfile::new("Nova", "Canine", 2)).unwrap();

        let names: Vec<&str> = roster.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Luna", "Atlas", "Nova"]);
    }

    #[test]
    fn test_add_invalid_leaves_roster_unchanged() {
        let mut roster = setup_roster();
        let before = roster.list().to_vec();

        let result = roster.add(PetProfile::new("", "Canine", 2));
        assert!(matches!(result, Err(RosterError::Validation(_))));

        let result = roster.add(PetProfile::new("Nova", "", 2));
        assert!(matches!(result, Err(RosterError::Validation(_))));

        assert_eq!(roster.list(), before.as_slice());
    }

    #[test]
    fn test_add_duplicate_id() {
        let mut roster = setup_roster();
        let existing = roster.list()[0].clone();
        assert!(matches!(
            roster.add(existing),
            Err(RosterError::Validation(_))
        ));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_update_replaces_record() {
        let mut roster = setup_roster();
        let mut luna = roster.list()[0].clone();
        luna.weight = Some("19".into());
        luna.notes = Some("Inhaler twice daily".into());

        roster.update(luna.clone()).unwrap();

        assert_eq!(roster.get(&luna.id).unwrap(), &luna);
        assert_eq!(roster.list()[0].id, luna.id);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut roster = setup_roster();
        let before = roster.list().to_vec();

        let stranger = PetProfile::new("Ghost", "Feline", 3);
        assert!(matches!(
            roster.update(stranger),
            Err(RosterError::NotFound(_))
        ));
        assert_eq!(roster.list(), before.as_slice());
    }

    #[test]
    fn test_update_invalid_keeps_original() {
        let mut roster = setup_roster();
        let original = roster.list()[1].clone();
        let mut edited = original.clone();
        edited.name.clear();

        assert!(matches!(
            roster.update(edited),
            Err(RosterError::Validation(_))
        ));
        assert_eq!(roster.list()[1], original);
    }

    #[test]
    fn test_remove() {
        let mut roster = setup_roster();
        let id = roster.list()[0].id.clone();

        assert!(roster.remove(&id));
        assert_eq!(roster.len(), 1);
        assert!(!roster.contains(&id));

        // Removing again is a no-op
        assert!(!roster.remove(&id));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_search() {
        let roster = setup_roster();
        let results = roster.search("lu", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Luna");
        assert_eq!(roster.search("", 1).len(), 1);
    }
}
