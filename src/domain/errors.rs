//! Domain-specific error types

use thiserror::Error;

/// Domain-level validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input for field {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Unknown pet type: {id}")]
    UnknownPetType { id: u32 },
}

impl DomainError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}
