use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::threads::dtos::{CreateThreadDto, ThreadResponseDto};
use crate::features::threads::services::ThreadService;
use crate::shared::types::ErrorResponse;
use crate::shared::validation::validate_request;

/// List all threads
///
/// Threads are ordered by creation time, most recent first.
#[utoipa::path(
    get,
    path = "/threads",
    responses(
        (status = 200, description = "All threads, newest first", body = Vec<ThreadResponseDto>),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "threads"
)]
pub async fn list_threads(
    State(service): State<Arc<ThreadService>>,
) -> Result<Json<Vec<ThreadResponseDto>>> {
    let threads = service.list().await?;
    Ok(Json(threads))
}

/// Create a thread
#[utoipa::path(
    post,
    path = "/threads/create",
    request_body = CreateThreadDto,
    responses(
        (status = 201, description = "Thread created", body = ThreadResponseDto),
        (status = 400, description = "Invalid body or missing title/creator", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "threads"
)]
pub async fn create_thread(
    State(service): State<Arc<ThreadService>>,
    AppJson(dto): AppJson<CreateThreadDto>,
) -> Result<(StatusCode, Json<ThreadResponseDto>)> {
    validate_request(&dto)?;

    let thread = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(thread)))
}
