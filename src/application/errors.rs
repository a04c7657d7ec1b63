//! Application layer error types

use crate::domain::DomainError;
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Resource not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Errors raised by repository implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Referenced {entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: u32 },

    #[error("Cannot save {entity}: {reason}")]
    Detached { entity: &'static str, reason: String },

    #[error("No {entity} ids left to assign")]
    IdsExhausted { entity: &'static str },
}

impl ApplicationError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        ApplicationError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Get the error type as a string for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ApplicationError::Domain(_) => "domain_error",
            ApplicationError::Repository(_) => "repository_error",
            ApplicationError::NotFound { .. } => "not_found",
            ApplicationError::Configuration { .. } => "configuration_error",
        }
    }
}
