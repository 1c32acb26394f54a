use validator::{Validate, ValidationErrors};

use crate::core::error::{AppError, Result};

/// Run `validator` rules on a request DTO and collect every failure into one
/// `AppError::Validation`, fields in alphabetical order.
pub fn validate_request<T: Validate>(dto: &T) -> Result<()> {
    dto.validate()
        .map_err(|e| AppError::Validation(collect_messages(&e)))
}

fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(length(min = 1))]
        alias: String,
    }

    #[test]
    fn test_valid_request_passes() {
        let dto = Sample {
            name: "a".to_string(),
            alias: "b".to_string(),
        };
        assert!(validate_request(&dto).is_ok());
    }

    #[test]
    fn test_messages_are_sorted_by_field() {
        let dto = Sample {
            name: String::new(),
            alias: String::new(),
        };
        match validate_request(&dto) {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors, vec!["alias is invalid", "name is required"])
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
