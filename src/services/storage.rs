use async_trait::async_trait;
use thiserror::Error;

use crate::models::lightbulb::Lightbulb;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("key not found: {name}")]
    NotFound { name: String },

    #[error("storage failure: {message}")]
    Internal { message: String },
}

impl StorageError {
    pub fn not_found(name: impl Into<String>) -> Self {
        StorageError::NotFound { name: name.into() }
    }
}

/// Persistence abstraction the lightbulb handlers are written against.
///
/// `create` and `update` both overwrite an existing entry. `delete` of an
/// absent name succeeds.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Lightbulb>, StorageError>;
    async fn get(&self, name: &str) -> Result<Lightbulb, StorageError>;
    async fn create(&self, lightbulb: Lightbulb) -> Result<(), StorageError>;
    async fn update(&self, lightbulb: Lightbulb) -> Result<(), StorageError>;
    async fn delete(&self, name: &str) -> Result<(), StorageError>;
}
