use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::threads::dtos::{CreateThreadDto, ThreadResponseDto};
use crate::features::threads::models::Thread;

/// Service for thread operations
pub struct ThreadService {
    pool: PgPool,
}

impl ThreadService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every thread, most recent first
    pub async fn list(&self) -> Result<Vec<ThreadResponseDto>> {
        let threads = sqlx::query_as::<_, Thread>(
            r#"
            SELECT id, title, creator, created_at
            FROM threads
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::debug!("Failed to list threads: {}", e);
            AppError::Database(e)
        })?;

        Ok(threads.into_iter().map(|t| t.into()).collect())
    }

    /// Insert a thread; id and created_at come back from the database
    pub async fn create(&self, dto: CreateThreadDto) -> Result<ThreadResponseDto> {
        let thread = sqlx::query_as::<_, Thread>(
            r#"
            INSERT INTO threads (title, creator)
            VALUES ($1, $2)
            RETURNING id, title, creator, created_at
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.creator)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::debug!("Failed to create thread: {}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Thread created: id={}, creator={}", thread.id, thread.creator);

        Ok(thread.into())
    }
}
