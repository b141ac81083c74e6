// Rust guideline compliant 2026-10-16

//! Max-integer service entry point.
//!
//! Loads configuration, opens the configured storage adapter and serves the
//! HTTP API until CTRL+C.
//!
//! # Usage
//!
//! ```text
//! # SQLite file in the working directory (default)
//! RUST_LOG=info cargo run
//!
//! # Throw-away in-memory store on another port
//! MAX_INTEGER_STORAGE=memory MAX_INTEGER_BIND_ADDR=0.0.0.0:3000 cargo run
//!
//! curl -X POST localhost:8080/api/v1/operation \
//!      -H 'content-type: application/json' -d '{"x":7,"y":5,"n":12345}'
//! curl localhost:8080/api/v1/operation
//! ```

use anyhow::Context as _;
use max_integer::adapters::InMemoryStorage;
use max_integer::config::StorageBackend;
use max_integer::{http, startup};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env before the subscriber so RUST_LOG may come from it.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    startup::env_file(dotenv)?;
    let config = startup::load_config()?;
    let listener = startup::bind(config.bind_addr).await?;

    match config.storage {
        StorageBackend::Sqlite { database_url } => {
            let storage = startup::open_sqlite(&database_url).await?;
            http::serve(listener, storage).await.context("server failed")?;
        }
        StorageBackend::InMemory => {
            http::serve(listener, InMemoryStorage::new())
                .await
                .context("server failed")?;
        }
    }

    tracing::info!("main.shutdown: complete");
    Ok(())
}
