// Rust guideline compliant 2026-10-13

//! Request validation gate.
//!
//! Turns a raw [`OperationRequest`] into a domain [`Operation`], or reports
//! every violated field at once via [`ValidationErrors`]. Never touches the
//! calculator or storage.

use std::fmt;

use domain::{ErrorCode, Operation};
use serde::Deserialize;

/// Lowest accepted value for any field.
///
/// `-1` is a sentinel floor, not a valid modulus: it passes here and is
/// rejected later by the calculator.
pub const MIN_VALUE: i64 = -1;

/// Highest accepted value for any field (`i32::MAX`).
pub const MAX_VALUE: i64 = 2_147_483_647;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Raw inbound request. Every field is optional so absence can be reported
/// instead of failing deserialization. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct OperationRequest {
    /// Modulus.
    pub x: Option<i64>,
    /// Required remainder.
    pub y: Option<i64>,
    /// Inclusive upper bound.
    pub n: Option<i64>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Request field names, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Modulus.
    X,
    /// Required remainder.
    Y,
    /// Inclusive upper bound.
    N,
}

impl Field {
    /// Field name as it appears in the request body.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::N => "n",
        }
    }
}

/// The constraint a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field missing or `null`.
    Required,
    /// Below [`MIN_VALUE`].
    Min,
    /// Above [`MAX_VALUE`].
    Max,
}

/// One violated constraint on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field.
    pub field: Field,
    /// Constraint it broke.
    pub rule: Rule,
}

impl FieldError {
    /// Fixed human-readable message for this violation.
    #[must_use]
    pub fn message(&self) -> String {
        let name = self.field.name();
        match self.rule {
            Rule::Required => format!("{name} must not be null"),
            Rule::Min => format!("{name} must be greater than or equal to {MIN_VALUE}"),
            Rule::Max => format!("{name} must be less than or equal to {MAX_VALUE}"),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors.iter().map(FieldError::message).collect::<Vec<_>>().join("; ")
}

/// All violations found in one request. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", join_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Violations in field order `x`, `y`, `n`.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// One message per violation.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::message).collect()
    }

    /// Always [`ErrorCode::InvalidParams`].
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidParams
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn check(field: Field, value: Option<i64>, errors: &mut Vec<FieldError>) -> Option<i64> {
    let rule = match value {
        None => Rule::Required,
        Some(v) if v < MIN_VALUE => Rule::Min,
        Some(v) if v > MAX_VALUE => Rule::Max,
        Some(v) => return Some(v),
    };
    errors.push(FieldError { field, rule });
    None
}

/// Validate `request` and build the uncalculated [`Operation`].
///
/// Each of `x`, `y`, `n` must be present and within
/// [`MIN_VALUE`]`..=`[`MAX_VALUE`]. Fields are checked independently; the
/// relation between them (e.g. `y < x`) is not.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every violated field.
pub fn validate(request: &OperationRequest) -> Result<Operation, ValidationErrors> {
    let mut errors = Vec::new();
    let x = check(Field::X, request.x, &mut errors);
    let y = check(Field::Y, request.y, &mut errors);
    let n = check(Field::N, request.n, &mut errors);
    match (x, y, n) {
        (Some(x), Some(y), Some(n)) => Ok(Operation::new(x, y, n)),
        _ => Err(ValidationErrors(errors)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
