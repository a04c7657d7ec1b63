//! Owner controller

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::application::errors::ApplicationError;
use crate::domain::OwnerId;
use crate::presentation::controllers::AppState;
use crate::presentation::extractors::ValidJson;
use crate::presentation::models::{ErrorResponse, OwnerDto, OwnerRequest};

/// List every owner with their pets
#[utoipa::path(
    get,
    path = "/owners",
    tag = "owners",
    responses(
        (status = 200, description = "All owners", body = Vec<OwnerDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_owners(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<OwnerDto>>, ApplicationError> {
    let owners = app_state.owner_service.list_owners().await?;
    Ok(Json(owners.iter().map(OwnerDto::from).collect()))
}

/// Get an owner by id
#[utoipa::path(
    get,
    path = "/owners/{ownerId}",
    tag = "owners",
    params(
        ("ownerId" = u32, Path, description = "Owner identifier")
    ),
    responses(
        (status = 200, description = "Owner details", body = OwnerDto),
        (status = 404, description = "Owner not found", body = ErrorResponse)
    )
)]
pub async fn get_owner(
    State(app_state): State<AppState>,
    Path(owner_id): Path<u32>,
) -> Result<Json<OwnerDto>, ApplicationError> {
    let owner = app_state
        .owner_service
        .find_owner(OwnerId::new(owner_id))
        .await?;
    Ok(Json(OwnerDto::from(&owner)))
}

/// Register a new owner
#[utoipa::path(
    post,
    path = "/owners",
    tag = "owners",
    request_body = OwnerRequest,
    responses(
        (status = 201, description = "Owner registered", body = OwnerDto),
        (status = 400, description = "Invalid owner", body = ErrorResponse)
    )
)]
pub async fn create_owner(
    State(app_state): State<AppState>,
    ValidJson(request): ValidJson<OwnerRequest>,
) -> Result<(StatusCode, Json<OwnerDto>), ApplicationError> {
    let owner = app_state.owner_service.create_owner(request.into()).await?;
    Ok((StatusCode::CREATED, Json(OwnerDto::from(&owner))))
}

/// Update an owner's contact details
#[utoipa::path(
    put,
    path = "/owners/{ownerId}",
    tag = "owners",
    params(
        ("ownerId" = u32, Path, description = "Owner identifier")
    ),
    request_body = OwnerRequest,
    responses(
        (status = 204, description = "Owner updated"),
        (status = 400, description = "Invalid owner", body = ErrorResponse),
        (status = 404, description = "Owner not found", body = ErrorResponse)
    )
)]
pub async fn update_owner(
    State(app_state): State<AppState>,
    Path(owner_id): Path<u32>,
    ValidJson(request): ValidJson<OwnerRequest>,
) -> Result<StatusCode, ApplicationError> {
    app_state
        .owner_service
        .update_owner(OwnerId::new(owner_id), request.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
