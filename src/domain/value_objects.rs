//! Domain value objects: typed identifiers and shared lookup values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a persistence identifier newtype.
///
/// Identifiers are only ever produced by a repository (or set explicitly in
/// tests); an entity that has not been saved holds `None` instead of a
/// sentinel value.
macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

identifier!(
    /// Identifier of a persisted owner
    OwnerId
);
identifier!(
    /// Identifier of a persisted pet
    PetId
);
identifier!(
    /// Identifier of a persisted pet type
    PetTypeId
);
identifier!(
    /// Identifier of a persisted veterinarian
    VetId
);
identifier!(
    /// Identifier of a persisted veterinary specialty
    SpecialtyId
);

/// Classification of a pet ("cat", "dog", ...), shared by reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetType {
    pub id: Option<PetTypeId>,
    pub name: String,
}

impl PetType {
    /// Create an unsaved pet type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Attach a persistence id
    pub fn with_id(mut self, id: PetTypeId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Area of expertise a veterinarian can declare
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Option<SpecialtyId>,
    pub name: String,
}

impl Specialty {
    /// Create an unsaved specialty
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Attach a persistence id
    pub fn with_id(mut self, id: SpecialtyId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Contact details an owner registers with the clinic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerProfile {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl OwnerProfile {
    /// Copy these details onto `owner`, leaving its id and pets untouched
    pub fn apply_to(&self, owner: &mut super::Owner) {
        owner.set_first_name(self.first_name.trim());
        owner.set_last_name(self.last_name.trim());
        owner.set_address(self.address.trim());
        owner.set_city(self.city.trim());
        owner.set_telephone(self.telephone.trim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_type_properties() {
        let mut pet_type = PetType::default();
        assert!(pet_type.id.is_none());

        pet_type.id = Some(PetTypeId::new(1));
        pet_type.name = "Cat".to_string();

        assert_eq!(pet_type.id, Some(PetTypeId::new(1)));
        assert_eq!(pet_type.name, "Cat");
    }

    #[test]
    fn test_specialty_starts_without_id() {
        let specialty = Specialty::new("radiology");
        assert!(specialty.id.is_none());
        assert_eq!(
            specialty.with_id(SpecialtyId::new(3)).id.map(SpecialtyId::value),
            Some(3)
        );
    }

    #[test]
    fn test_identifier_serializes_as_plain_number() {
        let json = serde_json::to_string(&PetId::new(42)).unwrap();
        assert_eq!(json, "42");

        let parsed: OwnerId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, OwnerId::from(7));
        assert_eq!(parsed.to_string(), "7");
    }

    #[test]
    fn test_owner_profile_applies_trimmed_fields() {
        let profile = OwnerProfile {
            first_name: " Jane ".to_string(),
            last_name: "Doe".to_string(),
            address: "456 Another St".to_string(),
            city: "Metropolis".to_string(),
            telephone: "9876543210 ".to_string(),
        };
        let mut owner = super::super::Owner::new();
        profile.apply_to(&mut owner);

        assert_eq!(owner.first_name(), "Jane");
        assert_eq!(owner.city(), "Metropolis");
        assert_eq!(owner.telephone(), "9876543210");
        assert!(owner.pets().is_empty());
    }
}
