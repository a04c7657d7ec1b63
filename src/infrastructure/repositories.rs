//! Repository traits for clinic data access

use async_trait::async_trait;

use crate::application::errors::RepositoryError;
use crate::domain::{Entity, Owner, Pet, PetType, PetTypeId, Vet};

/// Generic persistence capability shared by every entity type.
///
/// A missing id is reported as `Ok(None)` and an empty store as an empty
/// vector; errors are reserved for saves the store cannot honour.
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Send + 'static,
{
    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<E>, RepositoryError>;

    /// Persist `entity`, returning it with its id (and nested ids) assigned
    async fn save(&self, entity: E) -> Result<E, RepositoryError>;
}

/// Repository for owners; saving an owner also stores its new pets.
///
/// Pets that are already stored are updated through `Repository<Pet>::save`.
pub trait OwnerRepository: Repository<Owner> {}

impl<T> OwnerRepository for T where T: Repository<Owner> + ?Sized {}

/// Repository for pets and the pet type reference list
#[async_trait]
pub trait PetRepository: Repository<Pet> {
    /// All pet types ordered by name
    async fn find_pet_types(&self) -> Result<Vec<PetType>, RepositoryError>;

    async fn find_pet_type_by_id(&self, id: PetTypeId)
    -> Result<Option<PetType>, RepositoryError>;
}

/// Repository for veterinarians; saving a vet registers unknown specialties
pub trait VetRepository: Repository<Vet> {}

impl<T> VetRepository for T where T: Repository<Vet> + ?Sized {}
