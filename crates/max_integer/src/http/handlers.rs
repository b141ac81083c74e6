// Rust guideline compliant 2026-10-15

//! Request handlers for `/api/v1/operation`.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use domain::{Operation, OperationStorage};
use serde::Serialize;
use validation::OperationRequest;

use super::{AppState, error::ApiError};

/// Body of a successful `POST`.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// Always `true`.
    pub success: bool,
    /// The computed `k`.
    pub result: i64,
}

/// One stored computation as exposed by `GET`.
#[derive(Debug, Serialize)]
pub struct OperationDto {
    /// Storage-assigned identifier.
    pub id: Option<i64>,
    /// Modulus.
    pub x: i64,
    /// Required remainder.
    pub y: i64,
    /// Inclusive upper bound.
    pub n: i64,
    /// Computed `k`.
    pub result: Option<i64>,
}

impl From<Operation> for OperationDto {
    fn from(op: Operation) -> Self {
        Self { id: op.id(), x: op.x(), y: op.y(), n: op.n(), result: op.result() }
    }
}

/// Body of a successful `GET`.
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    /// Always `true`.
    pub success: bool,
    /// Stored computations in insertion order.
    pub data: Vec<OperationDto>,
}

/// `POST /api/v1/operation`: validate, calculate, persist.
///
/// # Returns
/// - `201 Created` with the computed `result`
/// - `400 Bad Request` for malformed bodies (1004), invalid fields (1005) or
///   calculation failures (1009)
/// - the rejection's own status when the body cannot be read (1011)
/// - `500 Internal Server Error` when the result cannot be persisted (1010)
pub async fn calculate<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<OperationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CalculateResponse>), ApiError>
where
    S: OperationStorage + Send + Sync + 'static,
{
    let Json(request) = payload?;
    tracing::info!(?request, "http.calculate.received");

    let operation = validation::validate(&request)?;
    let calculated = state.calculate.calculate(operation).await?;
    let result = calculated.result;

    Ok((StatusCode::CREATED, Json(CalculateResponse { success: true, result })))
}

/// `GET /api/v1/operation`: list every stored computation.
///
/// # Returns
/// - `200 OK` with a `data` array (possibly empty)
/// - `500 Internal Server Error` when storage cannot be read (1012)
pub async fn results<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<ResultsResponse>, ApiError>
where
    S: OperationStorage + Send + Sync + 'static,
{
    tracing::info!("http.results.received");
    let operations = state.results.results().await?;
    Ok(Json(ResultsResponse {
        success: true,
        data: operations.into_iter().map(OperationDto::from).collect(),
    }))
}
