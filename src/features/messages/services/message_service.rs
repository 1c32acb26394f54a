use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::messages::dtos::{CreateMessageDto, MessageResponseDto};
use crate::features::messages::models::Message;

/// Service for message operations
pub struct MessageService {
    pool: PgPool,
}

impl MessageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a thread's messages, most recent first. An unknown thread yields an empty list.
    pub async fn list_by_thread(&self, thread_id: i32) -> Result<Vec<MessageResponseDto>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, text_field, username, thread_id, images, created_at
            FROM message
            WHERE thread_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::debug!("Failed to list messages for thread {}: {}", thread_id, e);
            AppError::Database(e)
        })?;

        Ok(messages.into_iter().map(|m| m.into()).collect())
    }

    /// Insert a message; a dangling thread_id surfaces as `NotFound`
    pub async fn create(&self, dto: CreateMessageDto) -> Result<MessageResponseDto> {
        let thread_id = dto.thread_id;
        let images = dto.images.unwrap_or_default();

        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO message (text_field, username, thread_id, images)
            VALUES ($1, $2, $3, $4)
            RETURNING id, text_field, username, thread_id, images, created_at
            "#,
        )
        .bind(&dto.text_field)
        .bind(&dto.username)
        .bind(thread_id)
        .bind(&images)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                tracing::warn!("Message rejected, thread {} does not exist", thread_id);
                return AppError::NotFound(format!("Thread {} not found", thread_id));
            }
            tracing::debug!("Failed to create message in thread {}: {}", thread_id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Message created: id={}, thread_id={}, images={}",
            message.id,
            message.thread_id,
            message.images.len()
        );

        Ok(message.into())
    }
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
