//! Health check controller

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use serde_json::json;
use std::time::Instant;

use crate::presentation::controllers::AppState;
use crate::presentation::models::HealthResponse;

/// Basic health check with build metadata
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Store is unavailable", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(app_state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let start_time = Instant::now();
    let store = match app_state.pet_service.pet_types().await {
        Ok(pet_types) => json!({ "status": "healthy", "pet_types": pet_types.len() }),
        Err(e) => json!({ "status": "unhealthy", "message": e.to_string() }),
    };
    let healthy = store["status"] == "healthy";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        details: Some(json!({
            "store": store,
            "check_duration_ms": start_time.elapsed().as_millis(),
            "build_info": {
                "version": env!("CARGO_PKG_VERSION"),
                "build_date": option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown"),
                "git_sha": option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
            }
        })),
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn liveness_probe() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe; ready once the store answers queries
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready to accept traffic"),
        (status = 503, description = "Service is not ready")
    )
)]
pub async fn readiness_probe(State(app_state): State<AppState>) -> StatusCode {
    match app_state.vet_service.list_vets().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
