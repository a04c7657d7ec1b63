//! Application services orchestrating repositories for the HTTP layer

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use super::errors::ApplicationError;
use crate::domain::{
    ClinicValidator, DomainError, Entity, Owner, OwnerId, OwnerProfile, Pet, PetId, PetType,
    PetTypeId, Vet,
};
use crate::infrastructure::{OwnerRepository, PetRepository, VetRepository};

/// Fields a client submits when registering or editing a pet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetDraft {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub type_id: PetTypeId,
}

/// Service for managing clinic customers
#[async_trait]
pub trait OwnerService: Send + Sync {
    async fn list_owners(&self) -> Result<Vec<Owner>, ApplicationError>;

    async fn find_owner(&self, id: OwnerId) -> Result<Owner, ApplicationError>;

    async fn create_owner(&self, profile: OwnerProfile) -> Result<Owner, ApplicationError>;

    async fn update_owner(
        &self,
        id: OwnerId,
        profile: OwnerProfile,
    ) -> Result<Owner, ApplicationError>;
}

/// Service for managing the pets owners register
#[async_trait]
pub trait PetService: Send + Sync {
    async fn pet_types(&self) -> Result<Vec<PetType>, ApplicationError>;

    async fn find_pet(&self, id: PetId) -> Result<Pet, ApplicationError>;

    async fn create_pet(&self, owner_id: OwnerId, draft: PetDraft)
    -> Result<Pet, ApplicationError>;

    async fn update_pet(&self, id: PetId, draft: PetDraft) -> Result<Pet, ApplicationError>;
}

/// Service for listing veterinarians
#[async_trait]
pub trait VetService: Send + Sync {
    async fn list_vets(&self) -> Result<Vec<Vet>, ApplicationError>;
}

/// Owner service backed by an [`OwnerRepository`]
pub struct OwnerServiceImpl {
    owners: Arc<dyn OwnerRepository>,
    validator: ClinicValidator,
}

impl OwnerServiceImpl {
    pub fn new(owners: Arc<dyn OwnerRepository>) -> Self {
        Self {
            owners,
            validator: ClinicValidator::new(),
        }
    }
}

#[async_trait]
impl OwnerService for OwnerServiceImpl {
    async fn list_owners(&self) -> Result<Vec<Owner>, ApplicationError> {
        Ok(self.owners.find_all().await?)
    }

    async fn find_owner(&self, id: OwnerId) -> Result<Owner, ApplicationError> {
        self.owners.find_by_id(id).await?.ok_or_else(|| {
            warn!(owner_id = %id, "Owner not found");
            ApplicationError::not_found("owner", id)
        })
    }

    async fn create_owner(&self, profile: OwnerProfile) -> Result<Owner, ApplicationError> {
        self.validator.validate_owner(&profile)?;

        let mut owner = Owner::new();
        profile.apply_to(&mut owner);
        let saved = self.owners.save(owner).await?;

        info!(owner_id = ?saved.id(), "Registered owner");
        Ok(saved)
    }

    async fn update_owner(
        &self,
        id: OwnerId,
        profile: OwnerProfile,
    ) -> Result<Owner, ApplicationError> {
        self.validator.validate_owner(&profile)?;

        let mut owner = self.find_owner(id).await?;
        profile.apply_to(&mut owner);
        let saved = self.owners.save(owner).await?;

        info!(owner_id = %id, "Updated owner");
        Ok(saved)
    }
}

/// Pet service; new pets are attached through their owner
pub struct PetServiceImpl {
    owners: Arc<dyn OwnerRepository>,
    pets: Arc<dyn PetRepository>,
    validator: ClinicValidator,
}

impl PetServiceImpl {
    pub fn new(owners: Arc<dyn OwnerRepository>, pets: Arc<dyn PetRepository>) -> Self {
        Self {
            owners,
            pets,
            validator: ClinicValidator::new(),
        }
    }

    async fn resolve_pet_type(&self, id: PetTypeId) -> Result<PetType, ApplicationError> {
        self.pets
            .find_pet_type_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UnknownPetType { id: id.value() }.into())
    }

    /// Validate a draft and copy it onto `pet`
    async fn apply_draft(&self, pet: &mut Pet, draft: PetDraft) -> Result<(), ApplicationError> {
        self.validator.validate_pet_name(&draft.name)?;
        let pet_type = self.resolve_pet_type(draft.type_id).await?;

        pet.set_name(draft.name.trim());
        if let Some(birth_date) = draft.birth_date {
            pet.set_birth_date(birth_date);
        }
        pet.set_pet_type(pet_type);
        Ok(())
    }
}

#[async_trait]
impl PetService for PetServiceImpl {
    async fn pet_types(&self) -> Result<Vec<PetType>, ApplicationError> {
        Ok(self.pets.find_pet_types().await?)
    }

    async fn find_pet(&self, id: PetId) -> Result<Pet, ApplicationError> {
        self.pets.find_by_id(id).await?.ok_or_else(|| {
            warn!(pet_id = %id, "Pet not found");
            ApplicationError::not_found("pet", id)
        })
    }

    async fn create_pet(
        &self,
        owner_id: OwnerId,
        draft: PetDraft,
    ) -> Result<Pet, ApplicationError> {
        let mut owner = self.owners.find_by_id(owner_id).await?.ok_or_else(|| {
            warn!(owner_id = %owner_id, "Owner not found");
            ApplicationError::not_found("owner", owner_id)
        })?;

        let mut pet = Pet::new(String::new());
        self.apply_draft(&mut pet, draft).await?;
        let pet = owner.add_pet(pet).clone();
        let saved = self.pets.save(pet).await?;

        info!(owner_id = %owner_id, pet_id = ?saved.id(), "Registered pet");
        Ok(saved)
    }

    async fn update_pet(&self, id: PetId, draft: PetDraft) -> Result<Pet, ApplicationError> {
        let mut pet = self.find_pet(id).await?;
        self.apply_draft(&mut pet, draft).await?;
        let saved = self.pets.save(pet).await?;

        info!(pet_id = %id, "Updated pet");
        Ok(saved)
    }
}

/// Vet service backed by a [`VetRepository`]
pub struct VetServiceImpl {
    vets: Arc<dyn VetRepository>,
}

impl VetServiceImpl {
    pub fn new(vets: Arc<dyn VetRepository>) -> Self {
        Self { vets }
    }
}

#[async_trait]
impl VetService for VetServiceImpl {
    async fn list_vets(&self) -> Result<Vec<Vet>, ApplicationError> {
        Ok(self.vets.find_all().await?)
    }
}
