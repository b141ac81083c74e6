// Rust guideline compliant 2026-10-16

//! Startup steps run by `main` before the server accepts requests.
//!
//! Each step logs its failure with a stable `cause_code` and returns a
//! [`StartupError`]: configuration and socket problems are
//! [`ErrorCode::AppLoad`], an unreachable database is
//! [`ErrorCode::DatabaseConnection`].

use std::net::SocketAddr;
use std::path::PathBuf;

use domain::ErrorCode;
use tokio::net::TcpListener;

use crate::adapters::SqliteStorage;
use crate::config::{Config, ConfigError};

/// Errors that stop the service before it starts serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The `.env` file exists but could not be read or parsed.
    #[error("failed to read .env: {0}")]
    EnvFile(#[source] dotenvy::Error),
    /// An environment variable holds an unusable value.
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    /// The listen socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address from the configuration.
        addr: SocketAddr,
        /// Underlying socket error.
        source: std::io::Error,
    },
    /// The SQLite database could not be opened or its schema created.
    #[error("failed to open SQLite storage at {database_url}: {source}")]
    Database {
        /// URL from the configuration.
        database_url: String,
        /// Underlying `sqlx` error.
        source: sqlx::Error,
    },
}

impl StartupError {
    /// Stable code for this startup failure.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EnvFile(_) | Self::Config(_) | Self::Bind { .. } => ErrorCode::AppLoad,
            Self::Database { .. } => ErrorCode::DatabaseConnection,
        }
    }
}

fn logged(e: StartupError) -> StartupError {
    tracing::error!(error = %e, cause_code = e.code().code(), "startup.failed");
    e
}

/// Interpret the outcome of `dotenvy::dotenv()`.
///
/// A missing `.env` is not an error and yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`StartupError::EnvFile`] when the file exists but is unreadable
/// or malformed.
pub fn env_file(
    outcome: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, StartupError> {
    match outcome {
        Ok(path) => {
            tracing::info!(path = %path.display(), "startup.env_file: loaded");
            Ok(Some(path))
        }
        Err(e) if e.not_found() => {
            tracing::debug!("startup.env_file: none");
            Ok(None)
        }
        Err(e) => Err(logged(StartupError::EnvFile(e))),
    }
}

/// Read [`Config`] from the process environment.
///
/// # Errors
///
/// Returns [`StartupError::Config`] for unparseable values.
pub fn load_config() -> Result<Config, StartupError> {
    let config = Config::from_env().map_err(|e| logged(e.into()))?;
    tracing::info!(?config, "startup.config");
    Ok(config)
}

/// Bind the listen socket.
///
/// # Errors
///
/// Returns [`StartupError::Bind`] when the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| logged(StartupError::Bind { addr, source }))
}

/// Open the SQLite adapter over `database_url`.
///
/// # Errors
///
/// Returns [`StartupError::Database`] when the database cannot be opened.
pub async fn open_sqlite(database_url: &str) -> Result<SqliteStorage, StartupError> {
    SqliteStorage::new(database_url).await.map_err(|source| {
        logged(StartupError::Database { database_url: database_url.to_owned(), source })
    })
}
