use lightbulb_service::{
    routes, server, services::registry::LightbulbRegistry, utils::config::AppConfig,
    utils::telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("lightbulb_service=debug,tower_http=debug");

    tracing::info!("Starting standalone lightbulb server");

    let config = AppConfig::standalone().with_env_overrides();
    tracing::info!("Configuration loaded: {:?}", config);

    let registry = LightbulbRegistry::seeded(config.seed_lightbulbs.iter().cloned());
    let app = server::with_middleware(routes::standalone_router(registry), &config);

    server::serve(app, &config).await
}
