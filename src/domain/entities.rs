//! Domain entities representing clinic customers, their pets and veterinarians

use chrono::NaiveDate;
use std::fmt::Debug;
use uuid::Uuid;

use super::value_objects::*;

/// Common capability of everything a repository can persist
pub trait Entity {
    type Id: Copy + Eq + Debug + Send + Sync + 'static;

    /// Persistence identifier, absent until the entity has been saved
    fn id(&self) -> Option<Self::Id>;

    /// Whether the entity has never been saved
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}

/// Non-owning back-reference from a pet to the owner that registered it.
///
/// The reference carries the owner's instance handle so that an owner which
/// has not been saved yet can still be recognised, plus a copy of the fields
/// pets report about their owner. It is rebuilt by [`Owner`] whenever one of
/// those fields changes.
#[derive(Debug, Clone)]
pub struct OwnerRef {
    instance: Uuid,
    id: Option<OwnerId>,
    first_name: String,
    last_name: String,
}

impl OwnerRef {
    pub fn id(&self) -> Option<OwnerId> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last", as shown in pet details
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check whether this reference identifies `owner`.
    ///
    /// Persisted owners are identified by id; otherwise the instance handle
    /// decides.
    pub fn refers_to(&self, owner: &Owner) -> bool {
        match (self.id, owner.id) {
            (Some(linked), Some(current)) => linked == current,
            _ => self.instance == owner.instance,
        }
    }
}

impl PartialEq for OwnerRef {
    fn eq(&self, other: &OwnerRef) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.instance == other.instance,
        }
    }
}

impl PartialEq<Owner> for OwnerRef {
    fn eq(&self, other: &Owner) -> bool {
        self.refers_to(other)
    }
}

/// A clinic customer who may register any number of pets
#[derive(Debug, Clone)]
pub struct Owner {
    instance: Uuid,
    id: Option<OwnerId>,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
    pets: Vec<Pet>,
}

impl Default for Owner {
    fn default() -> Self {
        Self::new()
    }
}

impl Owner {
    /// Create an unsaved owner with no pets
    pub fn new() -> Self {
        Self {
            instance: Uuid::new_v4(),
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
            pets: Vec::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn telephone(&self) -> &str {
        &self.telephone
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Pets in registration order
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn set_id(&mut self, id: OwnerId) {
        self.id = Some(id);
        self.relink_pets();
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.relink_pets();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
        self.relink_pets();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_telephone(&mut self, telephone: impl Into<String>) {
        self.telephone = telephone.into();
    }

    /// Register a pet with this owner.
    ///
    /// The pet is appended to the owner's pets and its back-reference is set
    /// to this owner in the same call. Registering the same pet twice keeps
    /// both entries.
    pub fn add_pet(&mut self, mut pet: Pet) -> &mut Pet {
        pet.owner = Some(self.owner_ref());
        let index = self.pets.len();
        self.pets.push(pet);
        &mut self.pets[index]
    }

    /// First pet registered under `name`, ignoring case
    pub fn pet_named(&self, name: &str) -> Option<&Pet> {
        self.pets
            .iter()
            .find(|pet| pet.name.eq_ignore_ascii_case(name))
    }

    /// Pet with the given persistence id
    pub fn pet_mut(&mut self, id: PetId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.id == Some(id))
    }

    /// Whether `pet` is linked back to this owner
    pub fn owns(&self, pet: &Pet) -> bool {
        pet.owner.as_ref().is_some_and(|owner| owner.refers_to(self))
    }

    /// Build a back-reference describing this owner
    pub fn owner_ref(&self) -> OwnerRef {
        OwnerRef {
            instance: self.instance,
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    fn relink_pets(&mut self) {
        let owner_ref = self.owner_ref();
        for pet in &mut self.pets {
            pet.owner = Some(owner_ref.clone());
        }
    }
}

impl Entity for Owner {
    type Id = OwnerId;

    fn id(&self) -> Option<OwnerId> {
        self.id
    }
}

/// An animal registered by an owner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pet {
    id: Option<PetId>,
    name: String,
    birth_date: Option<NaiveDate>,
    pet_type: Option<PetType>,
    owner: Option<OwnerRef>,
}

impl Pet {
    /// Create an unsaved pet without owner
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn pet_type(&self) -> Option<&PetType> {
        self.pet_type.as_ref()
    }

    /// Owner that registered this pet; only [`Owner::add_pet`] sets it
    pub fn owner(&self) -> Option<&OwnerRef> {
        self.owner.as_ref()
    }

    pub fn set_id(&mut self, id: PetId) {
        self.id = Some(id);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = Some(birth_date);
    }

    pub fn set_pet_type(&mut self, pet_type: PetType) {
        self.pet_type = Some(pet_type);
    }
}

impl Entity for Pet {
    type Id = PetId;

    fn id(&self) -> Option<PetId> {
        self.id
    }
}

/// A veterinarian and the specialties they declared
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vet {
    id: Option<VetId>,
    first_name: String,
    last_name: String,
    specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_id(&mut self, id: VetId) {
        self.id = Some(id);
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Specialties in declaration order, duplicates included
    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    /// Specialties ordered by name for display
    pub fn specialties_by_name(&self) -> Vec<&Specialty> {
        let mut sorted: Vec<&Specialty> = self.specialties.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    pub fn add_specialty(&mut self, specialty: Specialty) {
        self.specialties.push(specialty);
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

impl Entity for Vet {
    type Id = VetId;

    fn id(&self) -> Option<VetId> {
        self.id
    }
}

impl Entity for PetType {
    type Id = PetTypeId;

    fn id(&self) -> Option<PetTypeId> {
        self.id
    }
}

impl Entity for Specialty {
    type Id = SpecialtyId;

    fn id(&self) -> Option<SpecialtyId> {
        self.id
    }
}
