//! Carebase server
//!
//! Serves FHIR Patient CRUD over HTTP from an in-memory or SQLite store.

use carebase_persistence::backends::memory::InMemoryStore;
use carebase_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use clap::Parser;
use tracing::info;

#[cfg(feature = "sqlite")]
use carebase_persistence::backends::sqlite::SqliteStore;

/// Database file used when no `--database-url` is given.
#[cfg(feature = "sqlite")]
const DEFAULT_DATABASE: &str = "carebase.db";

/// Opens and initializes a SQLite store from the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_store(config: &ServerConfig) -> anyhow::Result<SqliteStore> {
    let db_path = config.database_url.as_deref().unwrap_or(DEFAULT_DATABASE);
    info!(database = %db_path, "Initializing SQLite store");

    let store = if db_path == ":memory:" {
        SqliteStore::in_memory()?
    } else {
        SqliteStore::open(db_path)?
    };
    store.init_schema()?;

    Ok(store)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, base_url = %config.base_url(), "Server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        "Starting Carebase server"
    );

    match backend_mode {
        StorageBackendMode::Memory => start_memory(config).await,
        StorageBackendMode::Sqlite => start_sqlite(config).await,
    }
}

/// Starts the server over a non-persistent in-memory store.
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    info!("Records are kept in memory and lost on shutdown");
    let app = create_app_with_config(InMemoryStore::new(), config.clone());
    serve(app, &config).await
}

/// Starts the server over a SQLite store.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let store = create_sqlite_store(&config)?;
    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p carebase-server --features sqlite"
    )
}
