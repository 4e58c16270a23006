//! Pet profile models.

use serde::{Deserialize, Serialize};

use super::InvalidField;

/// Oldest age the profile editor accepts, in years.
pub const MAX_PET_AGE: u8 = 30;

/// A pet profile as shown in the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetProfile {
    /// Opaque UUID, fixed at creation
    pub id: String,
    /// Display name
    pub name: String,
    /// Species as entered (e.g., "Canine", "Feline")
    pub species: String,
    /// Age in years (0-30)
    pub age: u8,
    /// Weight in kg as entered; blank is allowed
    pub weight: Option<String>,
    /// Known allergies, may be empty or "None"
    pub allergies: String,
    /// Free-text care notes
    pub notes: Option<String>,
}

impl PetProfile {
    /// Create a profile with the required fields and a fresh id.
    pub fn new(name: impl Into<String>, species: impl Into<String>, age: u8) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            species: species.into(),
            age,
            weight: None,
            allergies: String::new(),
            notes: None,
        }
    }

    /// Blank template used to seed the "Add pet" editor.
    pub fn empty() -> Self {
        Self::new("", "", 0)
    }

    /// Check the invariants a profile must hold before it can be saved.
    pub fn validate(&self) -> Result<(), InvalidField> {
        if self.name.is_empty() {
            return Err(InvalidField::new("name", "must not be empty"));
        }
        if self.species.is_empty() {
            return Err(InvalidField::new("species", "must not be empty"));
        }
        if self.age > MAX_PET_AGE {
            return Err(InvalidField::new(
                "age",
                format!("{} is outside 0-{}", self.age, MAX_PET_AGE),
            ));
        }
        if let Some(weight) = self.weight.as_deref() {
            let trimmed = weight.trim();
            if !trimmed.is_empty() {
                match trimmed.parse::<f64>() {
                    Ok(kg) if kg.is_finite() && kg >= 0.0 => {}
                    _ => {
                        return Err(InvalidField::new(
                            "weight",
                            format!("'{}' is not a valid weight", weight),
                        ))
                    }
                }
            }
        }
        Ok(())
    }

    /// Whether the editor's Save action should be enabled.
    pub fn is_savable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Weight parsed to kilograms, if present and numeric.
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight
            .as_deref()
            .and_then(|w| w.trim().parse::<f64>().ok())
            .filter(|kg| kg.is_finite())
    }

    /// Roster row subtitle, e.g. "Canine · 4 yrs".
    pub fn subtitle(&self) -> String {
        format!("{} · {} yrs", self.species, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile() {
        let pet = PetProfile::new("Luna", "Canine", 4);
        assert_eq!(pet.name, "Luna");
        assert_eq!(pet.species, "Canine");
        assert_eq!(pet.id.len(), 36); // UUID format
        assert!(pet.is_savable());
    }

    #[test]
    fn test_empty_template_not_savable() {
        let pet = PetProfile::empty();
        assert!(!pet.is_savable());
        assert_eq!(pet.validate().unwrap_err().field, "name");
    }

    #[test]
    fn test_missing_species() {
        let pet = PetProfile::new("Luna", "", 4);
        assert_eq!(pet.validate().unwrap_err().field, "species");
        assert!(PetProfile::new("  ", "Canine", 4).is_savable());
    }

    #[test]
    fn test_age_bounds() {
        assert!(PetProfile::new("Old", "Feline", 30).validate().is_ok());
        let err = PetProfile::new("Older", "Feline", 31).validate().unwrap_err();
        assert_eq!(err.field, "age");
    }

    #[test]
    fn test_weight_must_be_numeric() {
        let mut pet = PetProfile::new("Atlas", "Feline", 7);
        pet.weight = Some("".into());
        assert!(pet.validate().is_ok());

        pet.weight = Some("6.5".into());
        assert_eq!(pet.weight_kg(), Some(6.5));

        pet.weight = Some("heavy".into());
        assert_eq!(pet.validate().unwrap_err().field, "weight");

        pet.weight = Some("-2".into());
        assert!(pet.validate().is_err());
    }

    #[test]
    fn test_subtitle() {
        let pet = PetProfile::new("Nova", "Canine", 2);
        assert_eq!(pet.subtitle(), "Canine · 2 yrs");
    }
}
