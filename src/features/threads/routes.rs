use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::threads::handlers;
use crate::features::threads::services::ThreadService;

/// Create routes for the threads feature
pub fn routes(service: Arc<ThreadService>) -> Router {
    Router::new()
        .route("/threads", get(handlers::list_threads))
        .route("/threads/create", post(handlers::create_thread))
        .with_state(service)
}
