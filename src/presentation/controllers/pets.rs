//! Pet controller

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::application::errors::ApplicationError;
use crate::domain::{OwnerId, PetId};
use crate::presentation::controllers::AppState;
use crate::presentation::extractors::ValidJson;
use crate::presentation::models::{ErrorResponse, PetDetailsDto, PetRequest, PetTypeDto};

/// List the pet types a pet can be registered with
#[utoipa::path(
    get,
    path = "/petTypes",
    tag = "pets",
    responses(
        (status = 200, description = "Pet types ordered by name", body = Vec<PetTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_pet_types(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<PetTypeDto>>, ApplicationError> {
    let pet_types = app_state.pet_service.pet_types().await?;
    Ok(Json(pet_types.iter().map(PetTypeDto::from).collect()))
}

/// Get a pet by id
///
/// The pet is resolved by its own id; the owner segment only scopes the URL.
#[utoipa::path(
    get,
    path = "/owners/{ownerId}/pets/{petId}",
    tag = "pets",
    params(
        ("ownerId" = u32, Path, description = "Owner identifier"),
        ("petId" = u32, Path, description = "Pet identifier")
    ),
    responses(
        (status = 200, description = "Pet details", body = PetDetailsDto),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Pet not found", body = ErrorResponse)
    )
)]
pub async fn get_pet(
    State(app_state): State<AppState>,
    Path((_owner_id, pet_id)): Path<(u32, u32)>,
) -> Result<Json<PetDetailsDto>, ApplicationError> {
    let pet = app_state.pet_service.find_pet(PetId::new(pet_id)).await?;
    Ok(Json(PetDetailsDto::from(&pet)))
}

/// Register a new pet for an owner
#[utoipa::path(
    post,
    path = "/owners/{ownerId}/pets",
    tag = "pets",
    params(
        ("ownerId" = u32, Path, description = "Owner identifier")
    ),
    request_body = PetRequest,
    responses(
        (status = 201, description = "Pet registered", body = PetDetailsDto),
        (status = 400, description = "Invalid pet", body = ErrorResponse),
        (status = 404, description = "Owner not found", body = ErrorResponse)
    )
)]
pub async fn create_pet(
    State(app_state): State<AppState>,
    Path(owner_id): Path<u32>,
    ValidJson(request): ValidJson<PetRequest>,
) -> Result<(StatusCode, Json<PetDetailsDto>), ApplicationError> {
    let pet = app_state
        .pet_service
        .create_pet(OwnerId::new(owner_id), request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(PetDetailsDto::from(&pet))))
}

/// Update an existing pet
#[utoipa::path(
    put,
    path = "/owners/{ownerId}/pets/{petId}",
    tag = "pets",
    params(
        ("ownerId" = u32, Path, description = "Owner identifier"),
        ("petId" = u32, Path, description = "Pet identifier")
    ),
    request_body = PetRequest,
    responses(
        (status = 204, description = "Pet updated"),
        (status = 400, description = "Invalid pet", body = ErrorResponse),
        (status = 404, description = "Pet not found", body = ErrorResponse)
    )
)]
pub async fn update_pet(
    State(app_state): State<AppState>,
    Path((_owner_id, pet_id)): Path<(u32, u32)>,
    ValidJson(request): ValidJson<PetRequest>,
) -> Result<StatusCode, ApplicationError> {
    app_state
        .pet_service
        .update_pet(PetId::new(pet_id), request.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
