/// Common test utilities for integration tests
///
/// Builds the full router over a real database pool so tests can drive
/// requests through `tower::Service::call` without binding a socket.
///
/// Requires DATABASE_URL to point at a PostgreSQL instance; the schema
/// is migrated in-place.

use axum::body::Body;
use axum::http::{Request, Response};
use sqlx::PgPool;
use taskman_api::app::{build_router, AppState};
use taskman_api::config::Config;
use taskman_shared::db::migrations::run_migrations;
use tower::Service as _;

/// Test context containing the pool and the in-process app
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context over a migrated database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;
        run_migrations(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a request through the router and returns the raw response
    pub async fn send(&mut self, request: Request<Body>) -> Response<axum::body::Body> {
        self.app.call(request).await.expect("infallible router call")
    }

    /// Deletes a task directly, for test cleanup
    pub async fn remove_task(&self, id: i64) -> anyhow::Result<()> {
        taskman_shared::models::task::Task::delete(&self.db, id).await?;
        Ok(())
    }
}

/// Builds a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}
