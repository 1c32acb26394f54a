use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::threads::dtos::ThreadResponseDto;

/// Database model for a row of `threads`
#[derive(Debug, Clone, FromRow)]
pub struct Thread {
    pub id: i32,
    pub title: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}

impl From<Thread> for ThreadResponseDto {
    fn from(t: Thread) -> Self {
        Self {
            id: t.id,
            title: t.title,
            creator: t.creator,
            created_at: t.created_at,
        }
    }
}
