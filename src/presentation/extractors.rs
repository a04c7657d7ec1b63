//! Request extractors reporting failures as [`ApplicationError`]

use axum::extract::{FromRequest, rejection::JsonRejection};

use crate::application::errors::ApplicationError;
use crate::domain::DomainError;

/// JSON body whose rejections become `400 INVALID_INPUT` error responses
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApplicationError))]
pub struct ValidJson<T>(pub T);

impl From<JsonRejection> for ApplicationError {
    fn from(rejection: JsonRejection) -> Self {
        DomainError::invalid_input("body", rejection.body_text()).into()
    }
}
