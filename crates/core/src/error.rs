//! Request-pipeline error taxonomy and its mapping to HTTP responses.
//!
//! [`classify`] is a pure function: it turns an [`ApiError`] into a status
//! code and a JSON body. Logging happens at the handler boundary.

use serde_json::{json, Value};
use thiserror::Error;

use crate::schema::ValidationError;
use crate::storage::RepositoryError;

/// Every failure a request can end in.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Body is missing.")]
    MissingBody,
    #[error("ID is missing.")]
    MissingId,
    #[error("Body is not a valid JSON object: {0}")]
    MalformedBody(String),
    #[error("Invalid lastEvaluatedKey: {0}")]
    MalformedCursor(String),
    #[error("Invalid query string: {0}")]
    MalformedQuery(String),
    #[error("Item not found")]
    NotFound,
    #[error("Update body contains no fields.")]
    EmptyUpdate,
    #[error(transparent)]
    Store(#[from] RepositoryError),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Stable name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "ValidationError",
            ApiError::MissingBody => "MissingBodyError",
            ApiError::MissingId => "MissingIdError",
            ApiError::MalformedBody(_) => "MalformedBodyError",
            ApiError::MalformedCursor(_) => "MalformedCursorError",
            ApiError::MalformedQuery(_) => "MalformedQueryError",
            ApiError::NotFound => "NotFoundError",
            ApiError::EmptyUpdate => "EmptyUpdateError",
            ApiError::Store(_) => "StoreError",
            ApiError::Internal(_) => "InternalError",
        }
    }
}

/// Status code and JSON body for a failed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: u16,
    pub body: Value,
}

impl ErrorResponse {
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// Maps an [`ApiError`] to its response.
///
/// - `Validation` -> 400 `{message: "Validation error", errors: [...]}`
/// - `MissingBody`, `MissingId`, `MalformedBody`, `MalformedCursor`,
///   `MalformedQuery`, `EmptyUpdate` -> 400 `{message}`
/// - `NotFound` -> 404 `{message: "Item not found"}`
/// - `Store`, `Internal` -> 500 `{message: "Internal Server Error", error}`
///
/// # Examples
///
/// ```
/// use itemstore_core::error::{classify, ApiError};
///
/// let response = classify(&ApiError::NotFound);
/// assert_eq!(response.status, 404);
/// assert_eq!(response.body["message"], "Item not found");
/// ```
pub fn classify(error: &ApiError) -> ErrorResponse {
    match error {
        ApiError::Validation(err) => ErrorResponse {
            status: 400,
            body: json!({
                "message": "Validation error",
                "errors": err.errors,
            }),
        },
        ApiError::MissingBody
        | ApiError::MissingId
        | ApiError::MalformedBody(_)
        | ApiError::MalformedCursor(_)
        | ApiError::MalformedQuery(_)
        | ApiError::EmptyUpdate => ErrorResponse {
            status: 400,
            body: json!({ "message": error.to_string() }),
        },
        ApiError::NotFound => ErrorResponse {
            status: 404,
            body: json!({ "message": "Item not found" }),
        },
        ApiError::Store(_) | ApiError::Internal(_) => ErrorResponse {
            status: 500,
            body: json!({
                "message": "Internal Server Error",
                "error": error.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldError;

    #[test]
    fn test_validation_maps_to_400_with_errors() {
        let error = ApiError::Validation(ValidationError {
            errors: vec![FieldError::new("email", "Invalid email")],
        });

        let response = classify(&error);

        assert_eq!(response.status, 400);
        assert_eq!(
            response.body,
            json!({
                "message": "Validation error",
                "errors": [{"field": "email", "issue": "Invalid email"}],
            })
        );
    }

    #[test]
    fn test_malformed_query_maps_to_400() {
        let error = ApiError::MalformedQuery("duplicate field `limit`".to_string());

        let response = classify(&error);

        assert_eq!(response.status, 400);
        assert_eq!(
            response.body,
            json!({"message": "Invalid query string: duplicate field `limit`"})
        );
        assert_eq!(error.kind(), "MalformedQueryError");
    }

    #[test]
    fn test_missing_body_maps_to_400() {
        let response = classify(&ApiError::MissingBody);

        assert_eq!(response.status, 400);
        assert_eq!(response.body, json!({"message": "Body is missing."}));
    }

    #[test]
    fn test_missing_id_maps_to_400() {
        let response = classify(&ApiError::MissingId);

        assert_eq!(response.status, 400);
        assert_eq!(response.body, json!({"message": "ID is missing."}));
    }

    #[test]
    fn test_malformed_cursor_maps_to_400() {
        let response = classify(&ApiError::MalformedCursor("expected a JSON object".into()));

        assert_eq!(response.status, 400);
        assert_eq!(
            response.body["message"],
            "Invalid lastEvaluatedKey: expected a JSON object"
        );
    }

    #[test]
    fn test_malformed_body_and_empty_update_map_to_400() {
        assert_eq!(classify(&ApiError::MalformedBody("eof".into())).status, 400);
        assert_eq!(classify(&ApiError::EmptyUpdate).status, 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = classify(&ApiError::NotFound);

        assert_eq!(response.status, 404);
        assert_eq!(response.body, json!({"message": "Item not found"}));
    }

    #[test]
    fn test_store_failure_maps_to_500_with_detail() {
        let error = ApiError::from(RepositoryError::QueryFailed("Table not found".into()));

        let response = classify(&error);

        assert_eq!(response.status, 500);
        assert!(response.is_server_error());
        assert_eq!(
            response.body,
            json!({
                "message": "Internal Server Error",
                "error": "Query failed: Table not found",
            })
        );
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = classify(&ApiError::Internal("boom".into()));

        assert_eq!(response.status, 500);
        assert_eq!(response.body["error"], "boom");
    }

    #[test]
    fn test_every_body_has_a_message() {
        let errors = [
            ApiError::Validation(ValidationError { errors: vec![] }),
            ApiError::MissingBody,
            ApiError::MissingId,
            ApiError::MalformedBody("x".into()),
            ApiError::MalformedCursor("x".into()),
            ApiError::NotFound,
            ApiError::EmptyUpdate,
            ApiError::Store(RepositoryError::ConnectionFailed("x".into())),
            ApiError::Internal("x".into()),
        ];

        for error in &errors {
            assert!(classify(error).body["message"].is_string(), "{}", error.kind());
        }
    }
}
