//! Materials Engine HTTP server.
//!
//! Usage: `materials-engine [CONFIG_DIR]`. The configuration directory
//! defaults to `$MATERIALS_ENGINE_CONFIG`, then `./config/default`.

use std::env;

use materials_engine::api::{AppState, create_router};
use materials_engine::config::ConfigLoader;
use materials_engine::logging;
use tracing::info;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config_dir = env::args()
        .nth(1)
        .or_else(|| env::var("MATERIALS_ENGINE_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let engine = config.engine();
    info!(
        config_dir = %config_dir,
        name = %engine.name,
        version = %engine.version,
        services = config.config().catalogs().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(&engine.bind_address).await?;
    info!(bind_address = %engine.bind_address, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
