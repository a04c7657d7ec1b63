// Application service tests
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::{
    ApplicationError, OwnerService, OwnerServiceImpl, PetDraft, PetService, PetServiceImpl,
    RepositoryError, VetService, VetServiceImpl,
};
use crate::domain::{
    DomainError, Entity, Owner, OwnerId, OwnerProfile, PetId, PetType, PetTypeId, Specialty, Vet,
};
use crate::infrastructure::{InMemoryClinicStore, Repository};

// Repository that refuses every write

struct ReadOnlyOwners;

#[async_trait]
impl Repository<Owner> for ReadOnlyOwners {
    async fn find_by_id(&self, _id: OwnerId) -> Result<Option<Owner>, RepositoryError> {
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<Owner>, RepositoryError> {
        Ok(vec![])
    }

    async fn save(&self, _owner: Owner) -> Result<Owner, RepositoryError> {
        Err(RepositoryError::Detached {
            entity: "owner",
            reason: "store is read-only".to_string(),
        })
    }
}

fn jane_doe() -> OwnerProfile {
    OwnerProfile {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        address: "456 Another St".to_string(),
        city: "Metropolis".to_string(),
        telephone: "9876543210".to_string(),
    }
}

async fn store_with_dog() -> (Arc<InMemoryClinicStore>, PetType) {
    let store = Arc::new(InMemoryClinicStore::new());
    let dog = Repository::<PetType>::save(store.as_ref(), PetType::new("dog"))
        .await
        .unwrap();
    (store, dog)
}

fn draft(name: &str, type_id: PetTypeId) -> PetDraft {
    PetDraft {
        name: name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2019, 5, 1),
        type_id,
    }
}

// Owner Service Tests

#[tokio::test]
async fn test_save_owner_assigns_id() {
    let store = Arc::new(InMemoryClinicStore::new());
    let service = OwnerServiceImpl::new(store);

    let saved = service.create_owner(jane_doe()).await.unwrap();
    let id = saved.id().expect("saved owner has an id");

    let found = service.find_owner(id).await.unwrap();
    assert_eq!(found.full_name(), "Jane Doe");
    assert_eq!(found.telephone(), "9876543210");
}

#[tokio::test]
async fn test_create_owner_validates_profile() {
    let service = OwnerServiceImpl::new(Arc::new(InMemoryClinicStore::new()));
    let mut profile = jane_doe();
    profile.telephone = "call me maybe".to_string();

    let err = service.create_owner(profile).await.unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidInput { ref field, .. }) if field == "telephone"
    ));
    assert!(service.list_owners().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_missing_owner_is_not_found() {
    let service = OwnerServiceImpl::new(Arc::new(InMemoryClinicStore::new()));

    let err = service.find_owner(OwnerId::new(42)).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound { ref resource, ref id } if resource == "owner" && id == "42"));
}

#[tokio::test]
async fn test_update_owner_keeps_pets() {
    let (store, dog) = store_with_dog().await;
    let owners = OwnerServiceImpl::new(store.clone());
    let pets = PetServiceImpl::new(store.clone(), store);

    let owner = owners.create_owner(jane_doe()).await.unwrap();
    let owner_id = owner.id().unwrap();
    pets.create_pet(owner_id, draft("Rex", dog.id.unwrap()))
        .await
        .unwrap();

    let mut profile = jane_doe();
    profile.city = "Gotham".to_string();
    let updated = owners.update_owner(owner_id, profile).await.unwrap();

    assert_eq!(updated.city(), "Gotham");
    assert_eq!(updated.pets().len(), 1);
    assert!(updated.owns(&updated.pets()[0]));
}

#[tokio::test]
async fn test_repository_failure_is_propagated() {
    let service = OwnerServiceImpl::new(Arc::new(ReadOnlyOwners));

    let err = service.create_owner(jane_doe()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Repository(_)));
    assert_eq!(err.error_type(), "repository_error");
}

// Pet Service Tests

#[tokio::test]
async fn test_create_pet_links_owner() {
    let (store, dog) = store_with_dog().await;
    let owners = OwnerServiceImpl::new(store.clone());
    let pets = PetServiceImpl::new(store.clone(), store);

    let owner = owners.create_owner(jane_doe()).await.unwrap();
    let pet = pets
        .create_pet(owner.id().unwrap(), draft(" Rex ", dog.id.unwrap()))
        .await
        .unwrap();

    assert_eq!(pet.name(), "Rex");
    assert_eq!(pet.pet_type(), Some(&dog));
    assert_eq!(pet.owner().unwrap(), &owner);

    let found = pets.find_pet(pet.id().unwrap()).await.unwrap();
    assert_eq!(found, pet);
}

#[tokio::test]
async fn test_create_pet_for_missing_owner() {
    let (store, dog) = store_with_dog().await;
    let pets = PetServiceImpl::new(store.clone(), store);

    let err = pets
        .create_pet(OwnerId::new(9), draft("Rex", dog.id.unwrap()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound { .. }));
}

#[tokio::test]
async fn test_create_pet_with_unknown_type() {
    let (store, _) = store_with_dog().await;
    let owners = OwnerServiceImpl::new(store.clone());
    let pets = PetServiceImpl::new(store.clone(), store);
    let owner = owners.create_owner(jane_doe()).await.unwrap();

    let err = pets
        .create_pet(owner.id().unwrap(), draft("Rex", PetTypeId::new(77)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::UnknownPetType { id: 77 })
    ));
}

#[tokio::test]
async fn test_update_pet() {
    let (store, dog) = store_with_dog().await;
    let cat = Repository::<PetType>::save(store.as_ref(), PetType::new("cat"))
        .await
        .unwrap();
    let owners = OwnerServiceImpl::new(store.clone());
    let pets = PetServiceImpl::new(store.clone(), store);
    let owner = owners.create_owner(jane_doe()).await.unwrap();
    let pet = pets
        .create_pet(owner.id().unwrap(), draft("Rex", dog.id.unwrap()))
        .await
        .unwrap();

    let updated = pets
        .update_pet(pet.id().unwrap(), draft("Tom", cat.id.unwrap()))
        .await
        .unwrap();

    assert_eq!(updated.id(), pet.id());
    assert_eq!(updated.name(), "Tom");
    assert_eq!(updated.pet_type(), Some(&cat));

    let err = pets
        .update_pet(PetId::new(500), draft("Tom", cat.id.unwrap()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound { .. }));
}

#[tokio::test]
async fn test_find_pet_types() {
    let (store, _) = store_with_dog().await;
    Repository::<PetType>::save(store.as_ref(), PetType::new("cat"))
        .await
        .unwrap();
    let pets = PetServiceImpl::new(store.clone(), store);

    let types = pets.pet_types().await.unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].name, "cat");
}

// Vet Service Tests

#[tokio::test]
async fn test_list_vets() {
    let store = Arc::new(InMemoryClinicStore::new());
    let service = VetServiceImpl::new(store.clone());
    assert!(service.list_vets().await.unwrap().is_empty());

    let mut vet = Vet::new("Henry", "Stevens");
    vet.add_specialty(Specialty::new("radiology"));
    Repository::<Vet>::save(store.as_ref(), vet).await.unwrap();

    let vets = service.list_vets().await.unwrap();
    assert_eq!(vets.len(), 1);
    assert_eq!(vets[0].nr_of_specialties(), 1);
}
