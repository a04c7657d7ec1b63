//! Route definitions and server setup

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::Config;
use crate::presentation::{
    controllers::{
        AppState,
        health::{health_check, liveness_probe, readiness_probe},
        owners::{create_owner, get_owner, list_owners, update_owner},
        pets::{create_pet, get_pet, get_pet_types, update_pet},
        vets::list_vets,
    },
    middleware::logging_middleware,
    models::*,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::owners::list_owners,
        crate::presentation::controllers::owners::get_owner,
        crate::presentation::controllers::owners::create_owner,
        crate::presentation::controllers::owners::update_owner,
        crate::presentation::controllers::pets::get_pet_types,
        crate::presentation::controllers::pets::get_pet,
        crate::presentation::controllers::pets::create_pet,
        crate::presentation::controllers::pets::update_pet,
        crate::presentation::controllers::vets::list_vets,
        crate::presentation::controllers::health::health_check,
        crate::presentation::controllers::health::liveness_probe,
        crate::presentation::controllers::health::readiness_probe
    ),
    components(
        schemas(
            OwnerRequest,
            OwnerDto,
            OwnerPetDto,
            PetRequest,
            PetDetailsDto,
            PetTypeDto,
            VetDto,
            SpecialtyDto,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "owners", description = "Clinic customers"),
        (name = "pets", description = "Pets registered by owners and their types"),
        (name = "vets", description = "Veterinarians and their specialties"),
        (name = "health", description = "Service health probes")
    ),
    info(
        title = "Pet Clinic API",
        version = "0.1.0",
        description = "Owners, pets and veterinarians of a small animal clinic."
    )
)]
pub struct ApiDoc;

/// Create the application router with its middleware stack
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let clinic_routes = Router::new()
        .route("/owners", get(list_owners).post(create_owner))
        .route("/owners/{ownerId}", get(get_owner).put(update_owner))
        .route("/owners/{ownerId}/pets", post(create_pet))
        .route(
            "/owners/{ownerId}/pets/{petId}",
            get(get_pet).put(update_pet),
        )
        .route("/petTypes", get(get_pet_types))
        .route("/vets", get(list_vets));

    let health_routes = Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_probe))
        .route("/health/ready", get(readiness_probe));

    let mut router = Router::new().merge(clinic_routes).merge(health_routes);

    if config.server.enable_docs {
        router =
            router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.server.allowed_origins))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_seconds,
                )))
                .layer(middleware::from_fn(logging_middleware)),
        )
        .with_state(app_state)
}

/// CORS policy; `*` allows any origin, unparsable origins are skipped
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
