//! In-memory implementation of every clinic repository
//!
//! The store keeps normalized tables (owners, pets, pet types, vets,
//! specialties) behind a single async lock and rebuilds the domain graph on
//! each read, so every pet handed out is linked to its owner through
//! [`Owner::add_pet`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::debug;

use super::repositories::{PetRepository, Repository};
use crate::application::errors::RepositoryError;
use crate::domain::{
    Entity, Owner, OwnerId, Pet, PetId, PetType, PetTypeId, Specialty, SpecialtyId, Vet, VetId,
};

#[derive(Debug, Clone)]
struct OwnerRecord {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

impl From<&Owner> for OwnerRecord {
    fn from(owner: &Owner) -> Self {
        Self {
            first_name: owner.first_name().to_string(),
            last_name: owner.last_name().to_string(),
            address: owner.address().to_string(),
            city: owner.city().to_string(),
            telephone: owner.telephone().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct PetRecord {
    name: String,
    birth_date: Option<NaiveDate>,
    type_id: Option<PetTypeId>,
    owner_id: OwnerId,
}

#[derive(Debug, Clone)]
struct VetRecord {
    first_name: String,
    last_name: String,
    specialty_ids: Vec<SpecialtyId>,
}

/// Last identifier handed out per table
#[derive(Debug, Default)]
struct Sequences {
    owner: u32,
    pet: u32,
    pet_type: u32,
    vet: u32,
    specialty: u32,
}

/// Allocate a fresh id, or keep an explicit one and move the sequence past it
fn assign(
    sequence: &mut u32,
    explicit: Option<u32>,
    entity: &'static str,
) -> Result<u32, RepositoryError> {
    match explicit {
        Some(id) => {
            *sequence = (*sequence).max(id);
            Ok(id)
        }
        None => {
            *sequence = sequence
                .checked_add(1)
                .ok_or(RepositoryError::IdsExhausted { entity })?;
            Ok(*sequence)
        }
    }
}

#[derive(Debug, Default)]
struct ClinicTables {
    owners: BTreeMap<OwnerId, OwnerRecord>,
    pets: BTreeMap<PetId, PetRecord>,
    pet_types: BTreeMap<PetTypeId, PetType>,
    vets: BTreeMap<VetId, VetRecord>,
    specialties: BTreeMap<SpecialtyId, Specialty>,
    sequences: Sequences,
}

impl ClinicTables {
    fn assemble_owner(&self, id: OwnerId) -> Option<Owner> {
        let record = self.owners.get(&id)?;
        let mut owner = Owner::new();
        owner.set_id(id);
        owner.set_first_name(record.first_name.as_str());
        owner.set_last_name(record.last_name.as_str());
        owner.set_address(record.address.as_str());
        owner.set_city(record.city.as_str());
        owner.set_telephone(record.telephone.as_str());

        for (pet_id, pet) in self.pets.iter().filter(|(_, pet)| pet.owner_id == id) {
            owner.add_pet(self.assemble_pet(*pet_id, pet));
        }

        Some(owner)
    }

    fn assemble_pet(&self, id: PetId, record: &PetRecord) -> Pet {
        let mut pet = Pet::new(record.name.as_str());
        pet.set_id(id);
        if let Some(birth_date) = record.birth_date {
            pet.set_birth_date(birth_date);
        }
        if let Some(pet_type) = record.type_id.and_then(|type_id| self.pet_types.get(&type_id)) {
            pet.set_pet_type(pet_type.clone());
        }
        pet
    }

    fn find_pet(&self, id: PetId) -> Option<Pet> {
        let record = self.pets.get(&id)?;
        let owner = self.assemble_owner(record.owner_id)?;
        owner.pets().iter().find(|pet| pet.id() == Some(id)).cloned()
    }

    fn assemble_vet(&self, id: VetId, record: &VetRecord) -> Vet {
        let mut vet = Vet::new(record.first_name.as_str(), record.last_name.as_str());
        vet.set_id(id);
        for specialty in record
            .specialty_ids
            .iter()
            .filter_map(|specialty_id| self.specialties.get(specialty_id))
        {
            vet.add_specialty(specialty.clone());
        }
        vet
    }

    /// Check the pet's type reference and return the id to store
    fn resolve_pet_type(&self, pet: &Pet) -> Result<Option<PetTypeId>, RepositoryError> {
        let Some(pet_type) = pet.pet_type() else {
            return Ok(None);
        };
        let type_id = pet_type.id.ok_or_else(|| RepositoryError::Detached {
            entity: "pet",
            reason: format!("pet type '{}' has not been saved", pet_type.name),
        })?;
        if !self.pet_types.contains_key(&type_id) {
            return Err(RepositoryError::MissingReference {
                entity: "pet type",
                id: type_id.value(),
            });
        }
        Ok(Some(type_id))
    }

    /// Write a pet whose references were already checked
    fn write_pet(
        &mut self,
        pet: &Pet,
        type_id: Option<PetTypeId>,
        owner_id: OwnerId,
    ) -> Result<PetId, RepositoryError> {
        let id = PetId::new(assign(
            &mut self.sequences.pet,
            pet.id().map(PetId::value),
            "pet",
        )?);
        self.pets.insert(
            id,
            PetRecord {
                name: pet.name().to_string(),
                birth_date: pet.birth_date(),
                type_id,
                owner_id,
            },
        );
        debug!(pet_id = %id, owner_id = %owner_id, "Stored pet");
        Ok(id)
    }

    fn is_stored(&self, pet: &Pet) -> bool {
        pet.id().is_some_and(|id| self.pets.contains_key(&id))
    }

    /// Id of an existing specialty with this name, registering it if needed
    fn specialty_id_for(
        &mut self,
        specialty: &Specialty,
    ) -> Result<SpecialtyId, RepositoryError> {
        if let Some(id) = specialty.id {
            return Ok(id);
        }
        if let Some((id, _)) = self
            .specialties
            .iter()
            .find(|(_, existing)| existing.name == specialty.name)
        {
            return Ok(*id);
        }
        let id = SpecialtyId::new(assign(&mut self.sequences.specialty, None, "specialty")?);
        self.specialties
            .insert(id, Specialty::new(specialty.name.as_str()).with_id(id));
        debug!(specialty_id = %id, name = %specialty.name, "Registered specialty");
        Ok(id)
    }
}

/// Process-local clinic store implementing all repository traits
#[derive(Debug, Default)]
pub struct InMemoryClinicStore {
    tables: RwLock<ClinicTables>,
}

impl InMemoryClinicStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Owner> for InMemoryClinicStore {
    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, RepositoryError> {
        Ok(self.tables.read().await.assemble_owner(id))
    }

    async fn find_all(&self) -> Result<Vec<Owner>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .owners
            .keys()
            .filter_map(|id| tables.assemble_owner(*id))
            .collect())
    }

    async fn save(&self, owner: Owner) -> Result<Owner, RepositoryError> {
        let mut tables = self.tables.write().await;

        // Stored pets change through `Repository<Pet>::save` only, so an owner
        // loaded before a pet update cannot write stale pet fields back.
        let new_pets = owner
            .pets()
            .iter()
            .filter(|pet| !tables.is_stored(pet))
            .map(|pet| Ok((pet, tables.resolve_pet_type(pet)?)))
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        let id = OwnerId::new(assign(
            &mut tables.sequences.owner,
            owner.id().map(OwnerId::value),
            "owner",
        )?);
        tables.owners.insert(id, OwnerRecord::from(&owner));
        for (pet, type_id) in &new_pets {
            tables.write_pet(pet, *type_id, id)?;
        }
        debug!(owner_id = %id, new_pets = new_pets.len(), "Stored owner");

        tables
            .assemble_owner(id)
            .ok_or(RepositoryError::MissingReference {
                entity: "owner",
                id: id.value(),
            })
    }
}

#[async_trait]
impl Repository<Pet> for InMemoryClinicStore {
    async fn find_by_id(&self, id: PetId) -> Result<Option<Pet>, RepositoryError> {
        Ok(self.tables.read().await.find_pet(id))
    }

    async fn find_all(&self) -> Result<Vec<Pet>, RepositoryError> {
        let tables = self.tables.read().await;
        let mut pets: Vec<Pet> = tables
            .owners
            .keys()
            .filter_map(|id| tables.assemble_owner(*id))
            .flat_map(|owner| owner.pets().to_vec())
            .collect();
        pets.sort_by_key(|pet| pet.id());
        Ok(pets)
    }

    async fn save(&self, pet: Pet) -> Result<Pet, RepositoryError> {
        let owner_ref = pet.owner().ok_or_else(|| RepositoryError::Detached {
            entity: "pet",
            reason: format!("pet '{}' has no owner", pet.name()),
        })?;
        let owner_id = owner_ref.id().ok_or_else(|| RepositoryError::Detached {
            entity: "pet",
            reason: format!("owner '{}' has not been saved", owner_ref.full_name()),
        })?;

        let mut tables = self.tables.write().await;
        if !tables.owners.contains_key(&owner_id) {
            return Err(RepositoryError::MissingReference {
                entity: "owner",
                id: owner_id.value(),
            });
        }
        let type_id = tables.resolve_pet_type(&pet)?;
        let id = tables.write_pet(&pet, type_id, owner_id)?;

        tables.find_pet(id).ok_or(RepositoryError::MissingReference {
            entity: "pet",
            id: id.value(),
        })
    }
}

#[async_trait]
impl PetRepository for InMemoryClinicStore {
    async fn find_pet_types(&self) -> Result<Vec<PetType>, RepositoryError> {
        let tables = self.tables.read().await;
        let mut pet_types: Vec<PetType> = tables.pet_types.values().cloned().collect();
        pet_types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(pet_types)
    }

    async fn find_pet_type_by_id(
        &self,
        id: PetTypeId,
    ) -> Result<Option<PetType>, RepositoryError> {
        Ok(self.tables.read().await.pet_types.get(&id).cloned())
    }
}

#[async_trait]
impl Repository<PetType> for InMemoryClinicStore {
    async fn find_by_id(&self, id: PetTypeId) -> Result<Option<PetType>, RepositoryError> {
        Ok(self.tables.read().await.pet_types.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<PetType>, RepositoryError> {
        Ok(self.tables.read().await.pet_types.values().cloned().collect())
    }

    async fn save(&self, pet_type: PetType) -> Result<PetType, RepositoryError> {
        let mut tables = self.tables.write().await;
        let id = PetTypeId::new(assign(
            &mut tables.sequences.pet_type,
            pet_type.id.map(PetTypeId::value),
            "pet type",
        )?);
        let stored = PetType::new(pet_type.name).with_id(id);
        tables.pet_types.insert(id, stored.clone());
        debug!(pet_type_id = %id, name = %stored.name, "Stored pet type");
        Ok(stored)
    }
}

#[async_trait]
impl Repository<Vet> for InMemoryClinicStore {
    async fn find_by_id(&self, id: VetId) -> Result<Option<Vet>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .vets
            .get(&id)
            .map(|record| tables.assemble_vet(id, record)))
    }

    async fn find_all(&self) -> Result<Vec<Vet>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .vets
            .iter()
            .map(|(id, record)| tables.assemble_vet(*id, record))
            .collect())
    }

    async fn save(&self, vet: Vet) -> Result<Vet, RepositoryError> {
        let mut tables = self.tables.write().await;

        if let Some(unknown) = vet
            .specialties()
            .iter()
            .filter_map(|specialty| specialty.id)
            .find(|id| !tables.specialties.contains_key(id))
        {
            return Err(RepositoryError::MissingReference {
                entity: "specialty",
                id: unknown.value(),
            });
        }

        let specialty_ids = vet
            .specialties()
            .iter()
            .map(|specialty| tables.specialty_id_for(specialty))
            .collect::<Result<Vec<_>, _>>()?;
        let id = VetId::new(assign(
            &mut tables.sequences.vet,
            vet.id().map(VetId::value),
            "vet",
        )?);
        let record = VetRecord {
            first_name: vet.first_name().to_string(),
            last_name: vet.last_name().to_string(),
            specialty_ids,
        };
        let stored = tables.assemble_vet(id, &record);
        tables.vets.insert(id, record);
        debug!(vet_id = %id, specialties = stored.nr_of_specialties(), "Stored vet");

        Ok(stored)
    }
}
