//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, connection setup, the Axum server lifecycle and
//! graceful shutdown.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::TunnelRepository;
use crate::infrastructure::persistence::{PgTunnelRepository, RedisTunnelRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

/// A connected tunnel store.
///
/// Owns the process-wide connection so it can be closed on shutdown.
pub struct Store {
    pub repository: Arc<dyn TunnelRepository>,
    pool: Option<PgPool>,
}

impl Store {
    /// Closes the PostgreSQL pool, waiting for checked-out connections.
    ///
    /// Redis connections are dropped with the repository.
    pub async fn close(self) {
        if let Some(pool) = self.pool {
            pool.close().await;
            info!("Database pool closed");
        }
    }
}

/// Connects to the store selected by `config.store_backend`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_store(config: &Config) -> Result<Store> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            info!("Connected to database");

            let repository = PgTunnelRepository::new(Arc::new(pool.clone()), &config.db_table);

            Ok(Store {
                repository: Arc::new(repository),
                pool: Some(pool),
            })
        }
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis backend")?;

            let repository = RedisTunnelRepository::connect(redis_url, &config.namespace)
                .await
                .context("Failed to connect to Redis")?;

            Ok(Store {
                repository: Arc::new(repository),
                pool: None,
            })
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured tunnel store (PostgreSQL pool or Redis connection)
/// - Axum HTTP server
///
/// Stops on Ctrl+C or SIGTERM, then closes the store.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let state = AppState::new(store.repository.clone());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server stopped");

    Ok(())
}

/// Completes on Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed, that source is ignored.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
