//! Detached editor drafts for pet profiles.

use super::{RosterResult, RosterStore};
use crate::models::PetProfile;

/// Whether the editor creates a new profile or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

/// Editor working on a copy of a profile until it is saved.
#[derive(Debug, Clone)]
pub struct PetEditor {
    draft: PetProfile,
    mode: EditorMode,
}

impl PetEditor {
    /// Start a new profile from the empty template.
    pub fn create() -> Self {
        Self {
            draft: PetProfile::empty(),
            mode: EditorMode::Create,
        }
    }

    /// Start editing a copy of an existing profile.
    pub fn edit(profile: &PetProfile) -> Self {
        Self {
            draft: profile.clone(),
            mode: EditorMode::Edit,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &PetProfile {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PetProfile {
        &mut self.draft
    }

    /// Whether the Save button is enabled. Uses the same checks as the roster.
    pub fn can_save(&self) -> bool {
        self.draft.is_savable()
    }

    /// Commit the draft to the roster and return the saved profile.
    pub fn save(self, roster: &mut RosterStore) -> RosterResult<PetProfile> {
        let saved = self.draft.clone();
        match self.mode {
            EditorMode::Create => roster.add(self.draft)?,
            EditorMode::Edit => roster.update(self.draft)?,
        }
        Ok(saved)
    }
}
