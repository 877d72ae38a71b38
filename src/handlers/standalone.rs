use axum::{
    extract::State,
    response::Json,
};

use crate::handlers::lightbulbs::NameQuery;
use crate::models::errors::AppError;
use crate::models::lightbulb::LightbulbStates;
use crate::services::registry::LightbulbRegistry;

// Handlers for the standalone server. They talk to the registry directly and
// always answer with the full map.

pub async fn list_lightbulbs(State(registry): State<LightbulbRegistry>) -> Json<LightbulbStates> {
    Json(registry.snapshot().await)
}

pub async fn switch_lightbulb(
    State(registry): State<LightbulbRegistry>,
    query: NameQuery,
) -> Result<Json<LightbulbStates>, AppError> {
    let name = query.required()?;
    Ok(Json(registry.switch(name).await?))
}

pub async fn create_lightbulb(
    State(registry): State<LightbulbRegistry>,
    query: NameQuery,
) -> Result<Json<LightbulbStates>, AppError> {
    let name = query.required()?;
    let lightbulbs = registry.create(name).await?;
    tracing::info!("Created lightbulb {}", name);
    Ok(Json(lightbulbs))
}

pub async fn delete_lightbulb(
    State(registry): State<LightbulbRegistry>,
    query: NameQuery,
) -> Result<Json<LightbulbStates>, AppError> {
    let name = query.required()?;
    let lightbulbs = registry.delete(name).await?;
    tracing::info!("Deleted lightbulb {}", name);
    Ok(Json(lightbulbs))
}
