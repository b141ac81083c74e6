// Rust guideline compliant 2026-10-15

//! HTTP transport adapter.
//!
//! Maps JSON requests onto the validation gate and the use cases, and their
//! outcomes back onto JSON responses. Routes:
//!
//! ```text
//! POST /api/v1/operation   {"x": 10, "y": 5, "n": 15}  -> 201 {"success": true, "result": 15}
//! GET  /api/v1/operation                               -> 200 {"success": true, "data": [...]}
//! ```

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{Router, routing::post};
use domain::OperationStorage;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use usecase::{CalculateUseCase, ResultsUseCase};

/// Route for both endpoints.
pub const OPERATION_PATH: &str = "/api/v1/operation";

/// Shared handler state: both use cases over one store.
///
/// Cloned per request; clones share the store through an `Arc`.
#[derive(Debug)]
pub struct AppState<S> {
    /// Backs `POST`.
    pub calculate: CalculateUseCase<S>,
    /// Backs `GET`.
    pub results: ResultsUseCase<S>,
}

impl<S> AppState<S> {
    /// Wire both use cases to `storage`.
    #[must_use]
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            calculate: CalculateUseCase::new(Arc::clone(&storage)),
            results: ResultsUseCase::new(storage),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self { calculate: self.calculate.clone(), results: self.results.clone() }
    }
}

/// Build the application router with permissive CORS and request tracing.
///
/// A panicking handler answers `500` with code 1000 instead of dropping the
/// connection.
pub fn router<S>(state: AppState<S>) -> Router
where
    S: OperationStorage + Send + Sync + 'static,
{
    Router::new()
        .route(
            OPERATION_PATH,
            post(handlers::calculate::<S>).get(handlers::results::<S>),
        )
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the router over `storage` on `listener` until CTRL+C.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve<S>(listener: TcpListener, storage: S) -> std::io::Result<()>
where
    S: OperationStorage + Send + Sync + 'static,
{
    let app = router(AppState::new(Arc::new(storage)));
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "http.serve.listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("main.shutdown: ctrl_c received"),
        Err(e) => tracing::error!(error = %e, "main.shutdown: ctrl_c listener failed"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStorage;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use domain::{Operation, StorageError};
    use tower::ServiceExt as _;

    /// Store whose every call fails.
    #[derive(Debug)]
    struct BrokenStorage;

    impl OperationStorage for BrokenStorage {
        async fn save(&self, _operation: Operation) -> Result<Operation, StorageError> {
            Err(StorageError::SaveFailed { reason: "connection refused".to_owned() })
        }

        async fn list(&self) -> Result<Vec<Operation>, StorageError> {
            Err(StorageError::FindFailed { reason: "connection refused".to_owned() })
        }
    }

    fn app<S>(storage: S) -> (Router, Arc<S>)
    where
        S: OperationStorage + Send + Sync + 'static,
    {
        let storage = Arc::new(storage);
        (router(AppState::new(Arc::clone(&storage))), storage)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(OPERATION_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn get() -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(OPERATION_PATH)
            .body(Body::empty())
            .unwrap()
    }

    // ------------------------------------------------------------------
    // POST
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn calculate_returns_201_with_result() {
        let (app, storage) = app(InMemoryStorage::new());
        let (status, json) = send(app, post_json(r#"{"x":5,"y":0,"n":4}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json, serde_json::json!({"success": true, "result": 0}));
        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn calculate_missing_field_is_1005() {
        let (app, storage) = app(InMemoryStorage::new());
        let (status, json) = send(app, post_json(r#"{"x":5,"y":0}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], 1005);
        assert_eq!(json["errors"], serde_json::json!(["n must not be null"]));
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn calculate_reports_every_invalid_field() {
        let (app, _) = app(InMemoryStorage::new());
        let (status, json) = send(app, post_json(r#"{"x":-2,"y":2147483648}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn calculate_malformed_body_is_1004() {
        let (app, _) = app(InMemoryStorage::new());
        let (status, json) = send(app, post_json(r#"{"x":"five"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], 1004);
        assert!(json.get("errors").is_none());
    }

    #[tokio::test]
    async fn calculate_oversized_body_is_1011() {
        let (app, storage) = app(InMemoryStorage::new());
        // Past axum's default 2 MB body limit.
        let body = format!(r#"{{"x":10,"y":5,"n":15,"pad":"{}"}}"#, "a".repeat(3 * 1024 * 1024));
        let (status, json) = send(app, post_json(&body)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], 1011);
        assert_eq!(json["message"], domain::ErrorCode::Transport.message());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn calculate_sentinel_input_is_1009_and_not_saved() {
        let (app, storage) = app(InMemoryStorage::new());
        let (status, json) = send(app, post_json(r#"{"x":-1,"y":-1,"n":-1}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], 1009);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn calculate_storage_fault_is_1010_without_cause() {
        let (app, _) = app(BrokenStorage);
        let (status, json) = send(app, post_json(r#"{"x":10,"y":5,"n":15}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], 1010);
        assert!(!json.to_string().contains("connection refused"), "cause leaked: {json}");
    }

    #[tokio::test]
    async fn handler_panic_is_1000_without_payload() {
        async fn explode() -> StatusCode {
            panic!("handler exploded");
        }

        let app = Router::new()
            .route("/explode", axum::routing::get(explode))
            .layer(CatchPanicLayer::custom(error::handle_panic));
        let request = Request::builder().uri("/explode").body(Body::empty()).unwrap();
        let (status, json) = send(app, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], 1000);
        assert_eq!(json["message"], domain::ErrorCode::Generic.message());
        assert!(!json.to_string().contains("exploded"), "payload leaked: {json}");
    }

    // ------------------------------------------------------------------
    // GET
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn results_empty_store_is_empty_array() {
        let (app, _) = app(InMemoryStorage::new());
        let (status, json) = send(app, get()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"success": true, "data": []}));
    }

    #[tokio::test]
    async fn results_lists_saved_operations() {
        let (app, _) = app(InMemoryStorage::new());
        send(app.clone(), post_json(r#"{"x":10,"y":5,"n":15}"#)).await;
        send(app.clone(), post_json(r#"{"x":10,"y":0,"n":20}"#)).await;
        let (status, json) = send(app, get()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["data"],
            serde_json::json!([
                {"id": 1, "x": 10, "y": 5, "n": 15, "result": 15},
                {"id": 2, "x": 10, "y": 0, "n": 20, "result": 20},
            ])
        );
    }

    #[tokio::test]
    async fn results_storage_fault_is_1012() {
        let (app, _) = app(BrokenStorage);
        let (status, json) = send(app, get()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], 1012);
        assert_eq!(json["message"], domain::ErrorCode::Retrieval.message());
    }
}
