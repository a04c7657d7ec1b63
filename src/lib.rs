//! Pet Clinic - owners, pets and veterinarians of a small animal clinic
//!
//! The crate follows a layered layout: `domain` holds the entities and their
//! association rules, `application` the services, `infrastructure` the
//! repository traits and the in-memory store, and `presentation` the HTTP API.

use std::sync::Arc;

use axum::Router;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use config::Config;
pub use logging::init_tracing;

use application::errors::ApplicationError;
use infrastructure::{InMemoryClinicStore, seed_demo_data};
use presentation::{AppState, create_router};

/// Build the application router on a fresh in-memory store
pub async fn create_app(config: Config) -> Result<Router, ApplicationError> {
    if config.server.request_timeout_seconds == 0 {
        return Err(ApplicationError::Configuration {
            message: "server.request_timeout_seconds must be greater than zero".to_string(),
        });
    }

    let store = Arc::new(InMemoryClinicStore::new());

    if config.store.seed_demo_data {
        seed_demo_data(store.as_ref(), store.as_ref(), store.as_ref()).await?;
    } else {
        tracing::info!("Demo data disabled, starting with an empty clinic");
    }

    let app_state = AppState::from_repositories(store.clone(), store.clone(), store);
    Ok(create_router(app_state, &config))
}
