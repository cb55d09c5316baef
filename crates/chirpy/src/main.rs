//! Chirpy server binary.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `chirpy.toml` and the environment
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Assemble shared application state
//! 5. Serve HTTP until `Ctrl-C`
//! 6. Close the connection pool

mod error;

use std::sync::Arc;

use chirpy_core::ChirpyConfig;
use chirpy_db::{PostgresConfig, PostgresPool};
use chirpy_server::{AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::StartupError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the database connection, or the
/// HTTP listener fails. Any of these aborts startup.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    info!("chirpy starting");

    run().await?;

    info!("chirpy shutdown complete");
    Ok(())
}

async fn run() -> Result<(), StartupError> {
    let config = ChirpyConfig::load()?;
    let platform = config.platform_mode();
    info!(
        host = config.host,
        port = config.port,
        ?platform,
        filepath_root = %config.filepath_root.display(),
        "Configuration loaded"
    );

    let pg_config =
        PostgresConfig::new(&config.db_url).with_max_connections(config.db_max_connections);
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    let state = AppState::new(Arc::new(pool.clone()), platform)
        .with_filepath_root(config.filepath_root.clone());

    let server_config = ServerConfig {
        host: config.host.clone(),
        port: config.port,
    };
    let served = chirpy_server::start_server(&server_config, Arc::new(state)).await;

    pool.close().await;
    served?;
    Ok(())
}

/// Install the global tracing subscriber.
///
/// Filter comes from `RUST_LOG` (default `info`). `LOG_FORMAT=json`
/// switches to line-delimited JSON output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
