//! # campuscoffeed, the campuscoffee daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the selected storage backend (`SQLite` pool + migrations,
//!   or the in-memory store)
//! - Construct data-service implementations (adapters)
//! - Construct application services, injecting data services via the port
//!   trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use anyhow::Context;

use campuscoffee_adapter_http_axum::router;
use campuscoffee_adapter_http_axum::state::AppState;
use campuscoffee_adapter_storage_memory::InMemoryDataService;
use campuscoffee_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqlitePosDataService, SqliteReviewDataService,
};
use campuscoffee_app::services::{PosService, ReviewService};
use campuscoffee_domain::pos::Pos;
use tracing_subscriber::EnvFilter;

use config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Storage + services + HTTP
    let app = match config.database.backend {
        StorageBackend::Sqlite => {
            let db = DbConfig {
                database_url: config.database.url.clone(),
            }
            .build()
            .await
            .context("initializing sqlite storage")?;
            let pool = db.pool().clone();

            let state = AppState::new(
                PosService::new(SqlitePosDataService::new(pool.clone())),
                ReviewService::new(SqliteReviewDataService::new(pool)),
            );
            router::build(state)
        }
        StorageBackend::Memory => {
            let state = AppState::new(
                PosService::new(InMemoryDataService::with_unique("name", |pos: &Pos| {
                    pos.name.clone()
                })),
                ReviewService::new(InMemoryDataService::new()),
            );
            router::build(state)
        }
    };

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "campuscoffeed listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("binding listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
