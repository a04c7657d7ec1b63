//! API request and response models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::PetDraft;
use crate::domain::{Entity, Owner, OwnerProfile, Pet, PetType, PetTypeId, Specialty, Vet};

/// Request model for registering or editing an owner
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    #[schema(example = "George")]
    pub first_name: String,

    #[schema(example = "Franklin")]
    pub last_name: String,

    #[schema(example = "110 W. Liberty St.")]
    pub address: String,

    #[schema(example = "Madison")]
    pub city: String,

    /// Up to 12 digits
    #[schema(example = "6085551023")]
    pub telephone: String,
}

impl From<OwnerRequest> for OwnerProfile {
    fn from(request: OwnerRequest) -> Self {
        OwnerProfile {
            first_name: request.first_name,
            last_name: request.last_name,
            address: request.address,
            city: request.city,
            telephone: request.telephone,
        }
    }
}

/// Request model for registering or editing a pet
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    #[schema(example = "Leo")]
    pub name: String,

    #[schema(example = "2010-09-07")]
    pub birth_date: Option<NaiveDate>,

    /// Identifier of an existing pet type
    #[schema(example = 1)]
    pub type_id: u32,
}

impl From<PetRequest> for PetDraft {
    fn from(request: PetRequest) -> Self {
        PetDraft {
            name: request.name,
            birth_date: request.birth_date,
            type_id: PetTypeId::new(request.type_id),
        }
    }
}

/// DTO for a pet type
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PetTypeDto {
    #[schema(example = 2)]
    pub id: Option<u32>,

    #[schema(example = "dog")]
    pub name: String,
}

impl From<&PetType> for PetTypeDto {
    fn from(pet_type: &PetType) -> Self {
        Self {
            id: pet_type.id.map(|id| id.value()),
            name: pet_type.name.clone(),
        }
    }
}

/// DTO for a pet looked up on its own, naming its owner
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetDetailsDto {
    #[schema(example = 1)]
    pub id: Option<u32>,

    #[schema(example = "Leo")]
    pub name: String,

    /// Owner's full name
    #[schema(example = "George Franklin")]
    pub owner: Option<String>,

    #[schema(example = "2010-09-07")]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeDto>,
}

impl From<&Pet> for PetDetailsDto {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id().map(|id| id.value()),
            name: pet.name().to_string(),
            owner: pet.owner().map(|owner| owner.full_name()),
            birth_date: pet.birth_date(),
            pet_type: pet.pet_type().map(PetTypeDto::from),
        }
    }
}

/// DTO for a pet listed under its owner
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPetDto {
    #[schema(example = 1)]
    pub id: Option<u32>,

    #[schema(example = "Leo")]
    pub name: String,

    #[schema(example = "2010-09-07")]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeDto>,
}

impl From<&Pet> for OwnerPetDto {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id().map(|id| id.value()),
            name: pet.name().to_string(),
            birth_date: pet.birth_date(),
            pet_type: pet.pet_type().map(PetTypeDto::from),
        }
    }
}

/// DTO for an owner and their pets
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    #[schema(example = 1)]
    pub id: Option<u32>,

    #[schema(example = "George")]
    pub first_name: String,

    #[schema(example = "Franklin")]
    pub last_name: String,

    #[schema(example = "110 W. Liberty St.")]
    pub address: String,

    #[schema(example = "Madison")]
    pub city: String,

    #[schema(example = "6085551023")]
    pub telephone: String,

    /// Pets ordered by name
    pub pets: Vec<OwnerPetDto>,
}

impl From<&Owner> for OwnerDto {
    fn from(owner: &Owner) -> Self {
        let mut pets: Vec<OwnerPetDto> = owner.pets().iter().map(OwnerPetDto::from).collect();
        pets.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            id: owner.id().map(|id| id.value()),
            first_name: owner.first_name().to_string(),
            last_name: owner.last_name().to_string(),
            address: owner.address().to_string(),
            city: owner.city().to_string(),
            telephone: owner.telephone().to_string(),
            pets,
        }
    }
}

/// DTO for a veterinary specialty
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyDto {
    #[schema(example = 1)]
    pub id: Option<u32>,

    #[schema(example = "radiology")]
    pub name: String,
}

impl From<&Specialty> for SpecialtyDto {
    fn from(specialty: &Specialty) -> Self {
        Self {
            id: specialty.id.map(|id| id.value()),
            name: specialty.name.clone(),
        }
    }
}

/// DTO for a veterinarian
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VetDto {
    #[schema(example = 3)]
    pub id: Option<u32>,

    #[schema(example = "Linda")]
    pub first_name: String,

    #[schema(example = "Douglas")]
    pub last_name: String,

    /// Specialties ordered by name
    pub specialties: Vec<SpecialtyDto>,

    #[schema(example = 2)]
    pub nr_of_specialties: usize,
}

impl From<&Vet> for VetDto {
    fn from(vet: &Vet) -> Self {
        Self {
            id: vet.id().map(|id| id.value()),
            first_name: vet.first_name().to_string(),
            last_name: vet.last_name().to_string(),
            specialties: vet
                .specialties_by_name()
                .into_iter()
                .map(SpecialtyDto::from)
                .collect(),
            nr_of_specialties: vet.nr_of_specialties(),
        }
    }
}

/// Error response model
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = "NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Resource not found")]
    pub message: String,

    /// Additional error context
    #[schema(example = r#"{"error": "Resource not found: pet with id 42"}"#)]
    pub details: Option<serde_json::Value>,

    /// Unique request identifier for tracking and support
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub request_id: Uuid,

    /// Error occurrence timestamp
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: DateTime<Utc>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service health status
    #[schema(example = "healthy")]
    pub status: String,

    /// Current service version
    #[schema(example = "0.1.0")]
    pub version: String,

    /// Health check timestamp
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: DateTime<Utc>,

    /// Build and store details
    pub details: Option<serde_json::Value>,
}
