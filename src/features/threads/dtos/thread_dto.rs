use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for creating a thread
///
/// Missing fields deserialize as empty strings so they fail validation with
/// a readable message instead of a serde error. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateThreadDto {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "creator is required"))]
    pub creator: String,
}

/// Response DTO for thread
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThreadResponseDto {
    pub id: i32,
    pub title: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}
