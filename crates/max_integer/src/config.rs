// Rust guideline compliant 2026-10-15

//! Runtime configuration read from the environment.
//!
//! `main` calls `dotenvy::dotenv()` first, so a `.env` file in the working
//! directory may supply any of these variables.

use std::net::SocketAddr;

/// Listen address. Default [`DEFAULT_BIND_ADDR`].
pub const BIND_ADDR_VAR: &str = "MAX_INTEGER_BIND_ADDR";
/// Storage backend: `sqlite` (default) or `memory`.
pub const STORAGE_VAR: &str = "MAX_INTEGER_STORAGE";
/// SQLite URL used by the `sqlite` backend. Default [`DEFAULT_DATABASE_URL`].
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Listen address when [`BIND_ADDR_VAR`] is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
/// SQLite file in the working directory, used when [`DATABASE_URL_VAR`] is
/// unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:max_integer.db";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The bind address does not parse as `ip:port`.
    #[error("invalid MAX_INTEGER_BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        /// Raw variable value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },
    /// The storage backend name is not recognized.
    #[error("unknown MAX_INTEGER_STORAGE {value:?} (expected \"sqlite\" or \"memory\")")]
    UnknownStorage {
        /// Raw variable value.
        value: String,
    },
}

/// Which `OperationStorage` adapter to run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// `SqliteStorage` over `database_url`.
    Sqlite {
        /// `sqlx` connection URL.
        database_url: String,
    },
    /// `InMemoryStorage`; nothing survives a restart.
    InMemory,
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Adapter backing the `OperationStorage` port.
    pub storage: StorageBackend,
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from `lookup`, falling back to defaults for unset
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddr`] or
    /// [`ConfigError::UnknownStorage`] for unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value: bind.clone(), source })?;

        let storage = match lookup(STORAGE_VAR).as_deref().map(str::trim) {
            None | Some("sqlite") => StorageBackend::Sqlite {
                database_url: lookup(DATABASE_URL_VAR)
                    .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            },
            Some("memory") => StorageBackend::InMemory,
            Some(other) => {
                return Err(ConfigError::UnknownStorage { value: other.to_owned() });
            }
        };

        Ok(Self { bind_addr, storage })
    }
}
