use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequestParts, Query, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::models::errors::AppError;
use crate::models::lightbulb::{to_states, Lightbulb};
use crate::AppState;

/// The `name` query parameter shared by every lightbulb route.
///
/// Only the first `name` pair counts; repeated or unrelated pairs are ignored.
#[derive(Debug, Default)]
pub struct NameQuery {
    pub name: Option<String>,
}

impl NameQuery {
    /// The `name` parameter, treating an empty value as absent
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// The `name` parameter, or `BadRequest` when absent or empty
    pub fn required(&self) -> Result<&str, AppError> {
        self.name().ok_or_else(AppError::missing_name)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for NameQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::warn!("failed to parse query string: {}", e);
                AppError::bad_request("bad request")
            })?;

        let name = pairs
            .into_iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value);

        Ok(NameQuery { name })
    }
}

/// List every lightbulb as `{name: on}`, or return a single one when `name` is given
pub async fn get_lightbulb(
    State(app_state): State<AppState>,
    query: NameQuery,
) -> Result<Response, AppError> {
    let storage = &app_state.storage;

    match query.name() {
        None => {
            let lightbulbs = storage.get_all().await.map_err(|e| {
                tracing::error!("an error occurred while trying to getall lightbulbs: {}", e);
                AppError::from(e)
            })?;
            Ok(Json(to_states(lightbulbs)).into_response())
        }
        Some(name) => {
            let lightbulb = storage.get(name).await.map_err(|e| {
                tracing::warn!("an error occurred while trying to get lightbulb: {}", e);
                AppError::from(e)
            })?;
            Ok(Json(lightbulb).into_response())
        }
    }
}

/// Store the lightbulb in the request body and echo it back
pub async fn create_lightbulb(
    State(app_state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Lightbulb>, AppError> {
    let body = body.map_err(|e| {
        tracing::warn!("failed to read create request body: {}", e);
        AppError::bad_request("bad request")
    })?;

    let lightbulb: Lightbulb = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("an error occurred while trying to create lightbulb: {}", e);
        AppError::bad_request("bad request")
    })?;

    if lightbulb.name.is_empty() {
        tracing::warn!("create requires a non-empty lightbulb name");
        return Err(AppError::bad_request("bad request"));
    }

    app_state.storage.create(lightbulb.clone()).await?;

    tracing::info!("Created lightbulb {} (on: {})", lightbulb.name, lightbulb.on);
    Ok(Json(lightbulb))
}

/// Flip the named lightbulb and return the updated collection
pub async fn switch_lightbulb(
    State(app_state): State<AppState>,
    query: NameQuery,
) -> Result<Response, AppError> {
    let name = query.required()?;
    let storage = &app_state.storage;

    let mut lightbulb = storage.get(name).await.map_err(|e| {
        tracing::warn!("an error occurred while trying to get lightbulb: {}", e);
        AppError::from(e)
    })?;

    lightbulb.toggle();

    storage.update(lightbulb.clone()).await.map_err(|e| {
        tracing::error!("an error occurred while trying to update lightbulb: {}", e);
        AppError::from(e)
    })?;

    tracing::info!("Switched lightbulb {} to {}", lightbulb.name, lightbulb.on);

    let lightbulbs = storage.get_all().await?;
    Ok(Json(to_states(lightbulbs)).into_response())
}

/// Remove the named lightbulb; removing an unknown name still succeeds
pub async fn delete_lightbulb(
    State(app_state): State<AppState>,
    query: NameQuery,
) -> Result<StatusCode, AppError> {
    let name = query.required()?;

    app_state.storage.delete(name).await.map_err(|e| {
        tracing::error!("an error occurred while trying to delete lightbulb: {}", e);
        AppError::from(e)
    })?;

    tracing::info!("Deleted lightbulb {}", name);
    Ok(StatusCode::NO_CONTENT)
}
