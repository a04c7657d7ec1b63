//! Infrastructure Layer - Persistence adapters
//!
//! This module holds the repository traits the application depends on and the
//! in-memory store that implements them.

pub mod memory_store;
pub mod repositories;
pub mod seed;

pub use memory_store::InMemoryClinicStore;
pub use repositories::*;
pub use seed::{SeedSummary, seed_demo_data};
