//! Application Layer - Use cases and application services
//!
//! This module orchestrates the domain model and coordinates between the
//! HTTP layer and the repositories.

pub mod errors;
pub mod services;

#[cfg(test)]
mod tests;

pub use errors::*;
pub use services::*;
