//! # Server Setup
//!
//! Startup sequence shared by both gateway binaries:
//!
//! 1. tracing subscriber from `LOG_LEVEL`
//! 2. configuration from the environment, validated
//! 3. lazily connecting Postgres pool, wrapped in the invoker
//! 4. one connectivity probe (logged, never fatal)
//! 5. router + middleware, bound to `HOST:PORT`
//! 6. graceful shutdown on Ctrl-C / SIGTERM, then the pool is drained

// region: --- Imports
use crate::routes::{create_router, Gateway};
use axum::extract::FromRef;
use lib_core::{Config, Invoker, PgProcedureStore};
use lib_utils::get_env_or;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub invoker: Invoker,
}

impl AppState {
    pub fn new(invoker: Invoker) -> Self {
        Self { invoker }
    }
}

impl FromRef<AppState> for Invoker {
    fn from_ref(state: &AppState) -> Self {
        state.invoker.clone()
    }
}
// endregion: --- AppState

// region: --- Server Setup
/// Initialize and run one gateway instance until shutdown.
///
/// # Errors
///
/// This function will return an error if:
/// - the tracing subscriber cannot be installed
/// - configuration loading or validation fails
/// - the listener cannot bind
pub async fn start_server(gateway: Gateway) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_level = init_tracing()?;

    info!("{} STARTING", gateway.name().to_uppercase());
    info!("Log level: {}", log_level);

    info!("Loading configuration...");
    let config = Config::from_env()?;
    config.validate()?;

    info!("Database: {} (max {} connections)", config.db_location(), config.db_max_connections);
    let store = Arc::new(PgProcedureStore::connect_lazy(&config));

    match store.ping().await {
        Ok(()) => info!("Connected to PostgreSQL database"),
        Err(e) => error!("Database connection error: {:?}", e),
    }

    let invoker = Invoker::new(store);
    let app = create_router(gateway, AppState::new(invoker.clone()), &config.allowed_origins);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("SERVER READY: {} running on http://{}", gateway.name(), bind_address);
    log_server_info(gateway);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    invoker.close().await;
    info!("Shutdown complete");
    Ok(())
}

/// Install the global fmt subscriber. Returns the effective level.
fn init_tracing() -> anyhow::Result<String> {
    let log_level = get_env_or("LOG_LEVEL", "info").to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => EnvFilter::new(&log_level),
        _ => EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))?;

    Ok(log_level)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, draining in-flight requests");
}

/// Log the endpoint listing.
fn log_server_info(gateway: Gateway) {
    info!("Available endpoints:");
    for endpoint in gateway.endpoints() {
        info!("   • {}", endpoint);
    }
    info!("   • GET  /health");
}
// endregion: --- Server Setup
