use std::collections::BTreeMap;

use crate::types::DbId;

/// Field name mapped to the list of messages for that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// The error kinds any component may raise across the request pipeline.
///
/// Handlers must translate underlying failures into one of these before they
/// reach the HTTP layer; anything else is treated as an unhandled fault.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Business-rule violation not tied to a single form field.
    #[error("{0}")]
    Domain(String),

    /// Structured input validation failure, per field.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// Lookup by identifier failed. Entity and id go to the logs; the wire
    /// body for this kind is always `{"error": "Not found"}`.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Missing or invalid credentials, raised before any handler runs.
    #[error("{0}")]
    Unauthorized(String),
}

impl CoreError {
    /// Validation failure on a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        CoreError::Validation(errors)
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        CoreError::Validation(fields)
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 1, message = "required"))]
        name: String,
    }

    #[test]
    fn validator_errors_fold_into_field_map() {
        let err: CoreError = Form {
            name: String::new(),
        }
        .validate()
        .unwrap_err()
        .into();

        match err {
            CoreError::Validation(fields) => {
                assert_eq!(fields["name"], vec!["required".to_string()]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn invalid_field_builds_single_entry_map() {
        match CoreError::invalid_field("sku", "required") {
            CoreError::Validation(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields["sku"], vec!["required".to_string()]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Product",
            id: 42,
        };
        assert_eq!(err.to_string(), "Product with id 42 not found");
    }
}
