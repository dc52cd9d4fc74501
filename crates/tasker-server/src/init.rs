//! Server Initialization
//!
//! Loads configuration, installs logging, wires the application context and
//! launches Rocket. Invalid configuration aborts startup.

use std::path::Path;

use tasker_infrastructure::AppContext;
use tasker_infrastructure::config::{AppConfig, ConfigLoader};
use tasker_infrastructure::logging::init_logging;
use tracing::info;

use crate::routes::build_rocket;

/// Run the Tasker server until shutdown
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    let context = AppContext::build(config).await?;
    let server = &context.config.server;
    info!(address = %server.address, port = server.port, "Starting Tasker server");

    let figment = rocket::Config::figment()
        .merge(("address", server.address.clone()))
        .merge(("port", server.port));

    let _rocket = build_rocket(context).configure(figment).launch().await?;
    info!("Tasker server stopped");
    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
