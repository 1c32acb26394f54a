use utoipa::{Modify, OpenApi};

use crate::features::messages::{dtos as messages_dtos, handlers as messages_handlers};
use crate::features::threads::{dtos as threads_dtos, handlers as threads_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Threads
        threads_handlers::list_threads,
        threads_handlers::create_thread,
        // Messages
        messages_handlers::list_messages,
        messages_handlers::create_message,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Threads
            threads_dtos::CreateThreadDto,
            threads_dtos::ThreadResponseDto,
            // Messages
            messages_dtos::CreateMessageDto,
            messages_dtos::MessageResponseDto,
        )
    ),
    tags(
        (name = "threads", description = "Discussion threads"),
        (name = "messages", description = "Messages posted into threads"),
    ),
    info(
        title = "Threadboard API",
        version = "0.1.0",
        description = "Discussion threads and messages",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in ["/threads", "/threads/create", "/messages", "/messages/create"] {
            assert!(paths.contains(&path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Forum".to_string(),
            version: "9.9.9".to_string(),
            description: "staging".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Forum");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("staging"));
    }
}
