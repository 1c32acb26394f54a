use std::sync::Arc;

use axum::{http::StatusCode, middleware::from_fn, routing::get, Router};

use crate::core::middleware::cross_origin_policy;
use crate::features::messages::{routes as messages_routes, MessageService};
use crate::features::threads::{routes as threads_routes, ThreadService};

/// Thread and message routes behind the shared cross-origin / verb gate
pub fn api_routes(
    thread_service: Arc<ThreadService>,
    message_service: Arc<MessageService>,
) -> Router {
    Router::new()
        .merge(threads_routes::routes(thread_service))
        .merge(messages_routes::routes(message_service))
        .layer(from_fn(cross_origin_policy))
}

/// Liveness probe, outside the API gate
pub fn health_routes() -> Router {
    async fn health_check() -> StatusCode {
        StatusCode::OK
    }

    Router::new().route("/health", get(health_check))
}
