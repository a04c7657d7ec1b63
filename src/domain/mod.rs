//! Domain Layer - Core clinic entities and their invariants
//!
//! This module contains the owner, pet and veterinarian entities, the shared
//! lookup values they reference, and the validation rules for customer input.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use services::*;
pub use value_objects::*;
