mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::datastore::TaskDataStore;

pub use error::{ApiError, HealthCheckFailed};
pub use handlers::{
    create_task, delete_task, health, list_tasks, update_task, Deleted, HealthStatus, JsonBody,
};

/// Shared request state: the store handle is an explicit dependency so tests
/// can inject an in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskDataStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TaskDataStore>) -> Self {
        Self { store }
    }
}

pub fn router(state: AppState) -> Router {
    // the surface is unauthenticated; the browser client may be served from
    // anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
