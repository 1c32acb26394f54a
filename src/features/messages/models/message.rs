use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{postgres::PgRow, Column, FromRow, Row, TypeInfo};

use crate::features::messages::dtos::MessageResponseDto;

/// Database model for a row of `message`
///
/// `images` is always materialized, whatever the column's storage type.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: i32,
    pub text_field: String,
    pub username: String,
    pub thread_id: i32,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for Message {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            text_field: row.try_get("text_field")?,
            username: row.try_get("username")?,
            thread_id: row.try_get("thread_id")?,
            images: decode_images(row, "images")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl From<Message> for MessageResponseDto {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            text_field: m.text_field,
            username: m.username,
            created_at: m.created_at,
            images: m.images,
            thread_id: m.thread_id,
        }
    }
}

/// Shapes the image column can come back in, depending on how the table was declared.
#[derive(Debug)]
enum RawImages {
    /// `TEXT[]` / `VARCHAR[]`
    Array(Option<Vec<String>>),
    /// `JSON` / `JSONB`
    Json(Option<Value>),
    /// JSON-encoded `TEXT` / `VARCHAR`
    Text(Option<String>),
    /// JSON-encoded `BYTEA`
    Bytes(Option<Vec<u8>>),
}

fn decode_images(row: &PgRow, column: &str) -> Result<Vec<String>, sqlx::Error> {
    let type_name = row.try_column(column)?.type_info().name().to_ascii_uppercase();

    let raw = match type_name.as_str() {
        "TEXT[]" | "VARCHAR[]" | "BPCHAR[]" | "NAME[]" => RawImages::Array(row.try_get(column)?),
        "JSON" | "JSONB" => RawImages::Json(row.try_get(column)?),
        "TEXT" | "VARCHAR" | "BPCHAR" => RawImages::Text(row.try_get(column)?),
        "BYTEA" => RawImages::Bytes(row.try_get(column)?),
        other => {
            return Err(sqlx::Error::ColumnDecode {
                index: column.to_string(),
                source: format!("unsupported image column type {}", other).into(),
            })
        }
    };

    normalize_images(raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

/// Collapse any raw representation into an ordered list; NULL and blank become empty.
fn normalize_images(raw: RawImages) -> Result<Vec<String>, serde_json::Error> {
    match raw {
        RawImages::Array(images) => Ok(images.unwrap_or_default()),
        RawImages::Json(None) | RawImages::Json(Some(Value::Null)) => Ok(Vec::new()),
        RawImages::Json(Some(value)) => serde_json::from_value(value),
        RawImages::Text(text) => match text {
            Some(s) if !s.trim().is_empty() => from_json_text(s.as_bytes()),
            _ => Ok(Vec::new()),
        },
        RawImages::Bytes(bytes) => match bytes {
            Some(b) if !b.is_empty() => from_json_text(&b),
            _ => Ok(Vec::new()),
        },
    }
}

fn from_json_text(raw: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    let images: Option<Vec<String>> = serde_json::from_slice(raw)?;
    Ok(images.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn images(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_native_array_keeps_order() {
        let raw = RawImages::Array(Some(images(&["b.png", "a.png"])));
        assert_eq!(normalize_images(raw).unwrap(), images(&["b.png", "a.png"]));
    }

    #[test]
    fn test_null_becomes_empty() {
        assert!(normalize_images(RawImages::Array(None)).unwrap().is_empty());
        assert!(normalize_images(RawImages::Json(None)).unwrap().is_empty());
        assert!(normalize_images(RawImages::Json(Some(Value::Null)))
            .unwrap()
            .is_empty());
        assert!(normalize_images(RawImages::Text(None)).unwrap().is_empty());
        assert!(normalize_images(RawImages::Bytes(None)).unwrap().is_empty());
    }

    #[test]
    fn test_json_value() {
        let raw = RawImages::Json(Some(json!(["a.png", "b.png"])));
        assert_eq!(normalize_images(raw).unwrap(), images(&["a.png", "b.png"]));
    }

    #[test]
    fn test_encoded_text_and_bytes() {
        let raw = RawImages::Text(Some(r#"["https://cdn.example.com/1.jpg"]"#.to_string()));
        assert_eq!(
            normalize_images(raw).unwrap(),
            images(&["https://cdn.example.com/1.jpg"])
        );

        let raw = RawImages::Bytes(Some(br#"["a.png","b.png"]"#.to_vec()));
        assert_eq!(normalize_images(raw).unwrap(), images(&["a.png", "b.png"]));

        let raw = RawImages::Text(Some("null".to_string()));
        assert!(normalize_images(raw).unwrap().is_empty());
    }

    #[test]
    fn test_blank_encodings_are_empty() {
        assert!(normalize_images(RawImages::Text(Some("  ".to_string())))
            .unwrap()
            .is_empty());
        assert!(normalize_images(RawImages::Bytes(Some(Vec::new())))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_malformed_encoding_is_an_error() {
        assert!(normalize_images(RawImages::Text(Some("a.png,b.png".to_string()))).is_err());
        assert!(normalize_images(RawImages::Json(Some(json!({"url": "a.png"})))).is_err());
        assert!(normalize_images(RawImages::Json(Some(json!([1, 2])))).is_err());
    }

    #[test]
    fn test_into_response_dto() {
        let message = Message {
            id: 1,
            text_field: "hi".to_string(),
            username: "bob".to_string(),
            thread_id: 1,
            images: Vec::new(),
            created_at: Utc::now(),
        };
        let dto: MessageResponseDto = message.into();
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["images"], json!([]));
        assert_eq!(value["thread_id"], 1);
        assert_eq!(value["text_field"], "hi");
    }
}
