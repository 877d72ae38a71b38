// HTTP request handlers module
// This module contains all the web request handlers for the application

pub mod health;
pub mod lightbulbs;
pub mod standalone;

use crate::models::errors::AppError;

/// Fallback for a known path hit with a method it does not serve
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::not_found("resource not found")
}
