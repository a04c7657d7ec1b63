//! Vet controller

use axum::{extract::State, response::Json};

use crate::application::errors::ApplicationError;
use crate::presentation::controllers::AppState;
use crate::presentation::models::{ErrorResponse, VetDto};

/// List all veterinarians
#[utoipa::path(
    get,
    path = "/vets",
    tag = "vets",
    responses(
        (status = 200, description = "All veterinarians", body = Vec<VetDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_vets(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<VetDto>>, ApplicationError> {
    let vets = app_state.vet_service.list_vets().await?;
    Ok(Json(vets.iter().map(VetDto::from).collect()))
}
