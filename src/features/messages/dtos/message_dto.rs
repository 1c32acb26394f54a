use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};

/// Request DTO for posting a message
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateMessageDto {
    #[validate(length(min = 1, message = "text_field is required"))]
    pub text_field: String,

    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    /// Id of an existing thread
    #[validate(range(min = 1, message = "thread_id is required"))]
    pub thread_id: i32,

    /// Image references in display order; absent or null means none
    pub images: Option<Vec<String>>,
}

/// Query params for listing messages
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMessagesQuery {
    /// Thread whose messages to list
    #[param(value_type = i32)]
    pub thread_id: Option<String>,
}

impl ListMessagesQuery {
    pub fn thread_id(&self) -> Result<i32> {
        let raw = self
            .thread_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("thread_id is required".to_string()))?;

        raw.parse::<i32>()
            .map_err(|_| AppError::BadRequest("Invalid thread_id format".to_string()))
    }
}

/// Response DTO for message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponseDto {
    pub id: i32,
    pub text_field: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub images: Vec<String>,
    pub thread_id: i32,
}
