use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("request timed out")]
    RequestTimeout,

    #[error("{message}")]
    InternalError { message: String },
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::InternalError { message } => {
                tracing::error!(error = %message, "request failed");
            }
            other => {
                tracing::debug!(status = %status, error = %other, "request rejected");
            }
        }

        (status, Json(self.to_response_body())).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound { name } => {
                AppError::not_found(format!("lightbulb '{}' not found", name))
            }
            internal @ StorageError::Internal { .. } => AppError::internal_error(internal.to_string()),
        }
    }
}

// Convenience functions for creating specific errors
impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound { message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest { message: message.into() }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        AppError::InternalError { message: message.into() }
    }

    pub fn missing_name() -> Self {
        AppError::bad_request(
            "a light bulb name should be provided as the value of a 'name' querystring parameter",
        )
    }
}
