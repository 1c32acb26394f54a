use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: String, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            message,
            errors,
        }
    }
}
