// Rust guideline compliant 2026-10-14

//! Application use cases for the max-integer service.
//!
//! [`CalculateUseCase`] runs the calculator and persists the result;
//! [`ResultsUseCase`] lists every stored computation. Both talk to storage
//! only through the `domain::OperationStorage` port and translate failures
//! into [`UseCaseError`], logging the underlying cause.

use std::sync::Arc;

use domain::{ErrorCode, Operation, OperationStorage};

// ---------------------------------------------------------------------------
// UseCaseError
// ---------------------------------------------------------------------------

/// Errors surfaced by the use cases.
///
/// Variants carry no cause: the low-level error is logged where it is
/// wrapped and never reaches callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UseCaseError {
    /// The calculator rejected the inputs or hit an arithmetic fault.
    #[error("{}", ErrorCode::Calculation.message())]
    Calculation,
    /// The calculated record could not be saved.
    #[error("{}", ErrorCode::Persistence.message())]
    Persistence,
    /// Stored records could not be listed.
    #[error("{}", ErrorCode::Retrieval.message())]
    Retrieval,
}

impl UseCaseError {
    /// Stable code for this failure.
    #[must_use]
    pub fn code(self) -> ErrorCode {
        match self {
            Self::Calculation => ErrorCode::Calculation,
            Self::Persistence => ErrorCode::Persistence,
            Self::Retrieval => ErrorCode::Retrieval,
        }
    }
}

// ---------------------------------------------------------------------------
// CalculateUseCase
// ---------------------------------------------------------------------------

/// A persisted computation and the `k` it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatedOperation {
    /// The stored record, with its generated id.
    pub operation: Operation,
    /// The computed `k`, the same value stored in `operation`.
    pub result: i64,
}

/// Compute-and-persist use case.
///
/// Generic over `S: OperationStorage` for static dispatch; the store is
/// shared with [`ResultsUseCase`] through an `Arc`.
#[derive(Debug)]
pub struct CalculateUseCase<S> {
    storage: Arc<S>,
}

impl<S> CalculateUseCase<S> {
    /// Create the use case over a shared store.
    #[must_use]
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

impl<S> Clone for CalculateUseCase<S> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage) }
    }
}

impl<S: OperationStorage + Sync> CalculateUseCase<S> {
    /// Calculate `k` for `operation`, save the completed record and return
    /// the stored form (inputs, result and generated id) alongside `k`.
    ///
    /// Performs exactly one storage write on success and none on failure.
    /// Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`UseCaseError::Calculation`] when the calculator fails, or
    /// [`UseCaseError::Persistence`] when the save fails.
    pub async fn calculate(
        &self,
        operation: Operation,
    ) -> Result<CalculatedOperation, UseCaseError> {
        tracing::info!(%operation, "calculate_use_case.calculate");

        let result = calculator::calculate(&operation).map_err(|e| {
            tracing::error!(
                error = %e,
                cause_code = e.code().code(),
                "calculate_use_case.calculation_failed"
            );
            UseCaseError::Calculation
        })?;

        let saved = self
            .storage
            .save(operation.with_result(result))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    cause_code = e.code().code(),
                    "calculate_use_case.persistence_failed"
                );
                UseCaseError::Persistence
            })?;

        tracing::debug!(operation = %saved, "calculate_use_case.saved");
        Ok(CalculatedOperation { operation: saved, result })
    }
}

// ---------------------------------------------------------------------------
// ResultsUseCase
// ---------------------------------------------------------------------------

/// Read-only use case listing all stored computations.
#[derive(Debug)]
pub struct ResultsUseCase<S> {
    storage: Arc<S>,
}

impl<S> ResultsUseCase<S> {
    /// Create the use case over a shared store.
    #[must_use]
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

impl<S> Clone for ResultsUseCase<S> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage) }
    }
}

impl<S: OperationStorage + Sync> ResultsUseCase<S> {
    /// Return every stored record in storage order. Empty when nothing has
    /// been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`UseCaseError::Retrieval`] when the store cannot be read.
    pub async fn results(&self) -> Result<Vec<Operation>, UseCaseError> {
        tracing::info!("results_use_case.results");
        let operations = self.storage.list().await.map_err(|e| {
            tracing::error!(
                error = %e,
                cause_code = e.code().code(),
                "results_use_case.retrieval_failed"
            );
            UseCaseError::Retrieval
        })?;
        tracing::debug!(count = operations.len(), "results_use_case.listed");
        Ok(operations)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
