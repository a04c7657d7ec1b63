//! Presentation Layer - Web API and HTTP handling
//!
//! Axum router, controllers and the JSON models exchanged with clients.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod models;
pub mod routes;


pub use controllers::*;
pub use extractors::*;
pub use middleware::*;
pub use models::*;
pub use routes::*;
