use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::messages::handlers;
use crate::features::messages::services::MessageService;

/// Create routes for the messages feature
pub fn routes(service: Arc<MessageService>) -> Router {
    Router::new()
        .route("/messages", get(handlers::list_messages))
        .route("/messages/create", post(handlers::create_message))
        .with_state(service)
}
