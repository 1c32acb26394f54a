use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::messages::dtos::{CreateMessageDto, ListMessagesQuery, MessageResponseDto};
use crate::features::messages::services::MessageService;
use crate::shared::types::ErrorResponse;
use crate::shared::validation::validate_request;

/// List messages of a thread
///
/// Messages are ordered by creation time, most recent first. A thread
/// without messages returns an empty array.
#[utoipa::path(
    get,
    path = "/messages",
    params(ListMessagesQuery),
    responses(
        (status = 200, description = "Messages of the thread, newest first", body = Vec<MessageResponseDto>),
        (status = 400, description = "Missing, repeated or non-numeric thread_id", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(service): State<Arc<MessageService>>,
    AppQuery(query): AppQuery<ListMessagesQuery>,
) -> Result<Json<Vec<MessageResponseDto>>> {
    let thread_id = query.thread_id()?;

    let messages = service.list_by_thread(thread_id).await?;
    Ok(Json(messages))
}

/// Post a message into a thread
#[utoipa::path(
    post,
    path = "/messages/create",
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message created", body = MessageResponseDto),
        (status = 400, description = "Invalid body or missing required fields", body = ErrorResponse),
        (status = 404, description = "Thread does not exist", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "messages"
)]
pub async fn create_message(
    State(service): State<Arc<MessageService>>,
    AppJson(dto): AppJson<CreateMessageDto>,
) -> Result<(StatusCode, Json<MessageResponseDto>)> {
    validate_request(&dto)?;

    let message = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
