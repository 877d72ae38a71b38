use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::lightbulb::Lightbulb;
use crate::services::storage::{Storage, StorageError};

/// `Storage` backed by a name -> state map held in memory
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<String, bool>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given lightbulbs
    pub fn with_lightbulbs(lightbulbs: impl IntoIterator<Item = Lightbulb>) -> Self {
        let data = lightbulbs
            .into_iter()
            .map(|lightbulb| (lightbulb.name, lightbulb.on))
            .collect();

        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn get_all(&self) -> Result<Vec<Lightbulb>, StorageError> {
        let data = self.data.read().await;
        Ok(data
            .iter()
            .map(|(name, on)| Lightbulb::new(name.clone(), *on))
            .collect())
    }

    async fn get(&self, name: &str) -> Result<Lightbulb, StorageError> {
        let data = self.data.read().await;
        data.get(name)
            .map(|on| Lightbulb::new(name, *on))
            .ok_or_else(|| StorageError::not_found(name))
    }

    async fn create(&self, lightbulb: Lightbulb) -> Result<(), StorageError> {
        let mut data = self.data.write().await;
        if data.insert(lightbulb.name.clone(), lightbulb.on).is_some() {
            tracing::debug!("Overwrote existing lightbulb: {}", lightbulb.name);
        }
        Ok(())
    }

    async fn update(&self, lightbulb: Lightbulb) -> Result<(), StorageError> {
        let mut data = self.data.write().await;
        data.insert(lightbulb.name, lightbulb.on);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StorageError> {
        let mut data = self.data.write().await;
        data.remove(name);
        Ok(())
    }
}
