use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{self, health, lightbulbs, standalone};
use crate::services::registry::LightbulbRegistry;
use crate::AppState;

pub const HEALTHCHECK: &str = "/healthcheck";
pub const LIGHTBULBS: &str = "/lightbulbs";
pub const LIGHTBULBS_CREATE: &str = "/lightbulbs/create";
pub const LIGHTBULBS_SWITCH: &str = "/lightbulbs/switch";
pub const LIGHTBULBS_DELETE: &str = "/lightbulbs/delete";

/// Routes of the Storage-backed service, without middleware
pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            HEALTHCHECK,
            get(health::health_check).fallback(handlers::method_not_allowed),
        )
        .route(
            LIGHTBULBS,
            get(lightbulbs::get_lightbulb).fallback(handlers::method_not_allowed),
        )
        .route(
            LIGHTBULBS_CREATE,
            post(lightbulbs::create_lightbulb).fallback(handlers::method_not_allowed),
        )
        .route(
            LIGHTBULBS_SWITCH,
            put(lightbulbs::switch_lightbulb).fallback(handlers::method_not_allowed),
        )
        .route(
            LIGHTBULBS_DELETE,
            delete(lightbulbs::delete_lightbulb).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(app_state)
}

/// Routes of the standalone server, without middleware
pub fn standalone_router(registry: LightbulbRegistry) -> Router {
    Router::new()
        .route(
            HEALTHCHECK,
            get(health::health_check).fallback(handlers::method_not_allowed),
        )
        .route(
            LIGHTBULBS,
            get(standalone::list_lightbulbs).fallback(handlers::method_not_allowed),
        )
        .route(
            LIGHTBULBS_CREATE,
            post(standalone::create_lightbulb).fallback(handlers::method_not_allowed),
        )
        .route(
            LIGHTBULBS_SWITCH,
            put(standalone::switch_lightbulb).fallback(handlers::method_not_allowed),
        )
        .route(
            LIGHTBULBS_DELETE,
            delete(standalone::delete_lightbulb).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(registry)
}
