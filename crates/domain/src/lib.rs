// Rust guideline compliant 2026-10-12

//! Shared domain types for the max-integer service.
//!
//! Defines the `Operation` computation record, the stable `ErrorCode`
//! catalogue, `StorageError`, and the hexagonal `OperationStorage` port.
//! All other crates depend on this crate; no workspace crate is imported here.

use std::fmt;

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// One computation record: the inputs `x`, `y`, `n`, the computed `result`
/// and the identifier assigned by storage.
///
/// Immutable once built. `result` is set by [`with_result`](Self::with_result)
/// after calculation, `id` by [`with_id`](Self::with_id) inside a storage
/// adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    id: Option<i64>,
    x: i64,
    y: i64,
    n: i64,
    result: Option<i64>,
}

impl Operation {
    /// Create an unpersisted, uncalculated record from its inputs.
    #[must_use]
    pub fn new(x: i64, y: i64, n: i64) -> Self {
        Self { id: None, x, y, n, result: None }
    }

    /// Return a copy carrying the computed `result`.
    #[must_use]
    pub fn with_result(self, result: i64) -> Self {
        Self { result: Some(result), ..self }
    }

    /// Return a copy carrying the storage-assigned `id`.
    #[must_use]
    pub fn with_id(self, id: i64) -> Self {
        Self { id: Some(id), ..self }
    }

    /// Storage identifier; `None` before the first save.
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Modulus.
    #[must_use]
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Required remainder.
    #[must_use]
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Inclusive upper bound for the result.
    #[must_use]
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Computed k; `None` until the calculator has run.
    #[must_use]
    pub fn result(&self) -> Option<i64> {
        self.result
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation(x={}, y={}, n={}", self.x, self.y, self.n)?;
        if let Some(result) = self.result {
            write!(f, ", result={result}")?;
        }
        if let Some(id) = self.id {
            write!(f, ", id={id}")?;
        }
        f.write_str(")")
    }
}

// ---------------------------------------------------------------------------
// ErrorCode
// ---------------------------------------------------------------------------

/// Stable error codes exposed to callers.
///
/// The numeric values are part of the public contract and never change.
/// 1006 is intentionally unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// General, uncontrolled error.
    Generic,
    /// Startup failed.
    AppLoad,
    /// The database could not be reached.
    DatabaseConnection,
    /// Out-of-domain argument reached the calculator.
    InvalidArgument,
    /// Request body unreadable or not the expected shape.
    InvalidRequest,
    /// Request fields violate declared constraints.
    InvalidParams,
    /// Storage adapter could not save a record.
    StorageSave,
    /// Storage adapter could not read records.
    StorageFind,
    /// The calculation failed.
    Calculation,
    /// Compute-and-persist could not persist the result.
    Persistence,
    /// Unexpected failure in the transport layer.
    Transport,
    /// The list use case failed.
    Retrieval,
}

impl ErrorCode {
    /// Numeric code sent on the wire.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Generic => 1000,
            Self::AppLoad => 1001,
            Self::DatabaseConnection => 1002,
            Self::InvalidArgument => 1003,
            Self::InvalidRequest => 1004,
            Self::InvalidParams => 1005,
            Self::StorageSave => 1007,
            Self::StorageFind => 1008,
            Self::Calculation => 1009,
            Self::Persistence => 1010,
            Self::Transport => 1011,
            Self::Retrieval => 1012,
        }
    }

    /// Fixed human-readable message sent on the wire.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Generic => "General, uncontrolled error",
            Self::AppLoad => "Error during application loading",
            Self::DatabaseConnection => "Database connection failure",
            Self::InvalidArgument => "Invalid argument provided to the calculation",
            Self::InvalidRequest => "Malformed request: unreadable or missing message body",
            Self::InvalidParams => "Malformed request: invalid data submitted",
            Self::StorageSave => "Error saving the operation to the database",
            Self::StorageFind => "Error retrieving operations from the database",
            Self::Calculation => "Error performing the max-integer calculation",
            Self::Persistence => "Error persisting the calculated operation",
            Self::Transport => "Error handling the operation request",
            Self::Retrieval => "Error retrieving the operation results",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

// ---------------------------------------------------------------------------
// Storage port
// ---------------------------------------------------------------------------

/// Errors from the `OperationStorage` hexagonal port.
///
/// `reason` carries the underlying fault for logging; it is never shown to
/// API callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The record could not be persisted.
    #[error("save failed: {reason}")]
    SaveFailed {
        /// Human-readable description.
        reason: String,
    },
    /// Stored records could not be read.
    #[error("find failed: {reason}")]
    FindFailed {
        /// Human-readable description.
        reason: String,
    },
}

impl StorageError {
    /// Stable code for this storage fault.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SaveFailed { .. } => ErrorCode::StorageSave,
            Self::FindFailed { .. } => ErrorCode::StorageFind,
        }
    }
}

/// Hexagonal port: append-only persistence of computation records.
///
/// Use cases depend exclusively on this trait -- never on a concrete adapter.
/// The returned futures are `Send` so adapters can serve concurrent HTTP
/// requests on a multi-threaded runtime.
pub trait OperationStorage {
    /// Persist `operation` and return it with a freshly assigned unique `id`.
    ///
    /// A failed save leaves nothing behind: the record is either stored in
    /// full or not at all.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::SaveFailed` on any underlying fault.
    fn save(
        &self,
        operation: Operation,
    ) -> impl Future<Output = Result<Operation, StorageError>> + Send;

    /// Return every stored record; an empty vector when none exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FindFailed` on any underlying fault.
    fn list(&self) -> impl Future<Output = Result<Vec<Operation>, StorageError>> + Send;
}
