use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::v1::response::ApiResponse;

#[derive(Error, Debug)]
pub enum DormError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for DormError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DormError::Validation(errors.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for DormError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        DormError::Internal(format!("state lock poisoned: {err}"))
    }
}

impl IntoResponse for DormError {
    fn into_response(self) -> Response {
        ApiResponse::<()>::from(self).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DormError>;
