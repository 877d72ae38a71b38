use lightbulb_service::{
    routes, server, utils::config::AppConfig, utils::telemetry, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("lightbulb_service=debug,tower_http=debug");

    tracing::info!("Starting lightbulb service");

    let config = AppConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::in_memory(&config);
    let app = server::with_middleware(routes::app_router(app_state), &config);

    server::serve(app, &config).await
}
