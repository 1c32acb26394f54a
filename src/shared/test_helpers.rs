use std::sync::Arc;

use axum::Router;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::core::router::api_routes;
use crate::features::messages::MessageService;
use crate::features::threads::ThreadService;

/// Reference schema, applied by storage-backed tests
#[allow(dead_code)]
pub const SCHEMA: &str = include_str!("../../schema/forum.sql");

/// Pool that never connects unless a query runs; enough for client-error paths.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_millis(200))
        .connect_lazy("postgres://postgres@127.0.0.1:1/threads")
        .unwrap()
}

pub fn lazy_api_router() -> Router {
    let pool = lazy_pool();
    api_routes(
        Arc::new(ThreadService::new(pool.clone())),
        Arc::new(MessageService::new(pool)),
    )
}

#[allow(dead_code)]
pub async fn apply_schema(pool: &PgPool) {
    sqlx::raw_sql(SCHEMA).execute(pool).await.unwrap();
}
