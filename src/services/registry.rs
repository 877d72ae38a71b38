use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::errors::AppError;
use crate::models::lightbulb::LightbulbStates;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a lightbulb with the provided name doesn't exist")]
    NotFound,

    #[error("a lightbulb with the provided name already exists")]
    AlreadyExists,
}

impl From<RegistryError> for AppError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound => AppError::not_found(error.to_string()),
            RegistryError::AlreadyExists => AppError::bad_request(error.to_string()),
        }
    }
}

/// Owned name -> state map used by the standalone server.
///
/// Unlike `InMemoryStorage`, every mutation checks for existence and answers
/// with a snapshot of the whole map taken under the same write lock.
#[derive(Clone, Default)]
pub struct LightbulbRegistry {
    lightbulbs: Arc<RwLock<HashMap<String, bool>>>,
}

impl LightbulbRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every given name switched off
    pub fn seeded<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lightbulbs = names.into_iter().map(|name| (name.into(), false)).collect();
        Self {
            lightbulbs: Arc::new(RwLock::new(lightbulbs)),
        }
    }

    pub async fn snapshot(&self) -> LightbulbStates {
        let lightbulbs = self.lightbulbs.read().await;
        Self::collect(&lightbulbs)
    }

    /// Flips the named lightbulb
    pub async fn switch(&self, name: &str) -> Result<LightbulbStates, RegistryError> {
        let mut lightbulbs = self.lightbulbs.write().await;
        let on = lightbulbs.get_mut(name).ok_or(RegistryError::NotFound)?;
        *on = !*on;
        tracing::debug!("Switched lightbulb {} to {}", name, *on);
        Ok(Self::collect(&lightbulbs))
    }

    /// Adds a new lightbulb, switched off
    pub async fn create(&self, name: &str) -> Result<LightbulbStates, RegistryError> {
        let mut lightbulbs = self.lightbulbs.write().await;
        if lightbulbs.contains_key(name) {
            return Err(RegistryError::AlreadyExists);
        }
        lightbulbs.insert(name.to_string(), false);
        Ok(Self::collect(&lightbulbs))
    }

    pub async fn delete(&self, name: &str) -> Result<LightbulbStates, RegistryError> {
        let mut lightbulbs = self.lightbulbs.write().await;
        lightbulbs.remove(name).ok_or(RegistryError::NotFound)?;
        Ok(Self::collect(&lightbulbs))
    }

    fn collect(lightbulbs: &HashMap<String, bool>) -> LightbulbStates {
        lightbulbs.iter().map(|(name, on)| (name.clone(), *on)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_names_start_off() {
        let registry = LightbulbRegistry::seeded(["livingroom", "kitchen"]);
        let snapshot = registry.snapshot().await;

        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.values().all(|on| !on));
    }

    #[tokio::test]
    async fn test_switch_twice_restores_state() {
        let registry = LightbulbRegistry::seeded(["kitchen"]);

        assert_eq!(registry.switch("kitchen").await.unwrap()["kitchen"], true);
        assert_eq!(registry.switch("kitchen").await.unwrap()["kitchen"], false);
    }

    #[tokio::test]
    async fn test_switch_unknown() {
        let registry = LightbulbRegistry::new();
        assert_eq!(registry.switch("attic").await, Err(RegistryError::NotFound));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates() {
        let registry = LightbulbRegistry::new();

        let snapshot = registry.create("porch").await.unwrap();
        assert_eq!(snapshot.get("porch"), Some(&false));
        assert_eq!(registry.create("porch").await, Err(RegistryError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_delete() {
        let registry = LightbulbRegistry::seeded(["livingroom", "kitchen"]);

        let snapshot = registry.delete("kitchen").await.unwrap();
        assert!(!snapshot.contains_key("kitchen"));
        assert_eq!(registry.delete("kitchen").await, Err(RegistryError::NotFound));
    }
}
