// Rust guideline compliant 2026-10-14

//! In-memory adapter for the `OperationStorage` port.
//!
//! Selected with `MAX_INTEGER_STORAGE=memory`; also used by the HTTP tests.
//! Contents are lost when the process exits.

use domain::{Operation, OperationStorage, StorageError};
use parking_lot::Mutex;

/// `OperationStorage` adapter backed by a mutex-guarded `Vec<Operation>`.
///
/// Ids are sequential from 1. The lock is held for the whole insert, so a
/// record is either appended with its id or not at all.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    inner: Mutex<Vec<Operation>>,
}

impl InMemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// `true` when nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl OperationStorage for InMemoryStorage {
    /// Append `operation` with the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::SaveFailed` when the record has no result yet.
    async fn save(&self, operation: Operation) -> Result<Operation, StorageError> {
        if operation.result().is_none() {
            return Err(StorageError::SaveFailed {
                reason: "operation has no result".to_owned(),
            });
        }
        let mut inner = self.inner.lock();
        let id = i64::try_from(inner.len() + 1).map_err(|e| StorageError::SaveFailed {
            reason: e.to_string(),
        })?;
        let saved = operation.with_id(id);
        inner.push(saved);
        tracing::debug!(operation = %saved, "in_memory.saved");
        Ok(saved)
    }

    /// Snapshot of every record in insertion order.
    async fn list(&self) -> Result<Vec<Operation>, StorageError> {
        Ok(self.inner.lock().clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
