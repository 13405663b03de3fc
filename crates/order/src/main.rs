use anyhow::{Context, Result};
use meal_order::{config::Config, handler::AppRouter, state::AppState};
use shared::{
    config::ConnectionManager,
    utils::{Telemetry, init_logger},
};
use tracing::{error, info};

const SERVICE_NAME: &str = "meal-order";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = config
        .otel_endpoint
        .as_deref()
        .map(|endpoint| Telemetry::init(SERVICE_NAME, endpoint))
        .transpose()
        .context("Failed to initialize telemetry")?;

    init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        SERVICE_NAME,
        config.log,
    );

    let pool = ConnectionManager::new_pool(&config.database)
        .context("Failed to initialize database pool")?;

    let state = AppState::new(pool, &config);

    // Not awaited: the server starts whether or not the table could be created.
    let _bootstrap = state.di_container.bootstrapper.clone().spawn();

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("🛑 Shutting down...");

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {}", e);
        }
    }

    info!("✅ Meal order service shutdown complete.");
    Ok(())
}
