//! Payload validation against a [`DerivedSchema`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::derive::DerivedSchema;
use super::field::{FieldType, ID_FIELD};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub issue: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            issue: issue.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.issue)
    }
}

/// A payload failed one or more field checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A record proven to satisfy a [`DerivedSchema`].
///
/// Entries keep the order of the validated payload, with an injected
/// identifier first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedRecord(Map<String, Value>);

impl ValidatedRecord {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Check `raw` against `schema`.
///
/// When `id` is given it is placed under `"id"` before checking, taking
/// precedence over any `"id"` in the payload. Unknown keys, missing required
/// fields, non-string values and malformed emails each produce one
/// [`FieldError`]: schema fields in declaration order first, then unknown keys
/// in payload order. `raw` is left untouched.
pub fn validate(
    schema: &DerivedSchema,
    raw: &Map<String, Value>,
    id: Option<&str>,
) -> Result<ValidatedRecord, ValidationError> {
    let mut candidate = Map::with_capacity(raw.len() + 1);
    if let Some(id) = id {
        candidate.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    }
    for (key, value) in raw {
        if id.is_some() && key == ID_FIELD {
            continue;
        }
        candidate.insert(key.clone(), value.clone());
    }

    let mut errors = Vec::new();

    for (field, rule) in schema.rules() {
        match candidate.get(field) {
            None if rule.required => errors.push(FieldError::new(field, "Required")),
            None => {}
            Some(value) => {
                if let Some(issue) = check_type(rule.field_type, value) {
                    errors.push(FieldError::new(field, issue));
                }
            }
        }
    }

    for key in candidate.keys() {
        if !schema.contains(key) {
            errors.push(FieldError::new(key, "Unrecognized key"));
        }
    }

    if errors.is_empty() {
        Ok(ValidatedRecord(candidate))
    } else {
        Err(ValidationError { errors })
    }
}

fn check_type(field_type: FieldType, value: &Value) -> Option<String> {
    let Value::String(s) = value else {
        return Some(format!("Expected string, received {}", json_type_name(value)));
    };

    match field_type {
        FieldType::String => None,
        FieldType::Email if is_email(s) => None,
        FieldType::Email => Some("Invalid email".to_string()),
    }
}

/// Whether `s` looks like an email address.
pub fn is_email(s: &str) -> bool {
    !s.starts_with('.') && !s.contains("..") && EMAIL_RE.is_match(s)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{derive, item_fields, SchemaMode};
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn create_schema() -> DerivedSchema {
        derive(SchemaMode::Create, &item_fields())
    }

    fn update_schema() -> DerivedSchema {
        derive(SchemaMode::Update, &item_fields())
    }

    #[test]
    fn create_accepts_complete_record_with_injected_id() {
        let raw = object(json!({"name": "Ana", "email": "a@x.com"}));

        let record = validate(&create_schema(), &raw, Some("ACT-1-ABCDEF")).unwrap();

        assert_eq!(record.get("id"), Some(&json!("ACT-1-ABCDEF")));
        assert_eq!(record.get("name"), Some(&json!("Ana")));
        assert_eq!(record.get("email"), Some(&json!("a@x.com")));
        let keys: Vec<&String> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id", "name", "email"]);
    }

    #[test]
    fn create_without_id_reports_missing_identifier() {
        let raw = object(json!({"name": "Ana", "email": "a@x.com"}));

        let err = validate(&create_schema(), &raw, None).unwrap_err();

        assert_eq!(err.errors, vec![FieldError::new("id", "Required")]);
    }

    #[test]
    fn create_reports_each_missing_field() {
        let raw = object(json!({}));

        let err = validate(&create_schema(), &raw, Some("ACT-1-ABCDEF")).unwrap_err();

        assert_eq!(
            err.errors,
            vec![
                FieldError::new("name", "Required"),
                FieldError::new("email", "Required"),
            ]
        );
    }

    #[test]
    fn injected_id_overrides_payload_id() {
        let raw = object(json!({"id": "client-chosen", "name": "Ana", "email": "a@x.com"}));

        let record = validate(&create_schema(), &raw, Some("ACT-1-ABCDEF")).unwrap();

        assert_eq!(record.get("id"), Some(&json!("ACT-1-ABCDEF")));
    }

    #[test]
    fn wrong_type_is_reported() {
        let raw = object(json!({"name": 42, "email": "a@x.com"}));

        let err = validate(&create_schema(), &raw, Some("ACT-1-ABCDEF")).unwrap_err();

        assert_eq!(
            err.errors,
            vec![FieldError::new("name", "Expected string, received number")]
        );
    }

    #[test]
    fn unknown_keys_are_rejected_after_schema_fields() {
        let raw = object(json!({"phone": "123", "name": "Ana", "email": "bad", "age": 3}));

        let err = validate(&create_schema(), &raw, Some("ACT-1-ABCDEF")).unwrap_err();

        assert_eq!(
            err.errors,
            vec![
                FieldError::new("email", "Invalid email"),
                FieldError::new("phone", "Unrecognized key"),
                FieldError::new("age", "Unrecognized key"),
            ]
        );
    }

    #[test]
    fn update_accepts_partial_record() {
        let raw = object(json!({"email": "new@x.com"}));

        let record = validate(&update_schema(), &raw, None).unwrap();

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("email"), Some(&json!("new@x.com")));
    }

    #[test]
    fn update_accepts_empty_record() {
        let record = validate(&update_schema(), &Map::new(), None).unwrap();

        assert!(record.is_empty());
    }

    #[test]
    fn update_rejects_malformed_email() {
        let raw = object(json!({"email": "not-an-email"}));

        let err = validate(&update_schema(), &raw, None).unwrap_err();

        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "email");
    }

    #[test]
    fn update_rejects_identifier_in_payload() {
        let raw = object(json!({"id": "ACT-2-ZZZZZZ"}));

        let err = validate(&update_schema(), &raw, None).unwrap_err();

        assert_eq!(err.errors, vec![FieldError::new("id", "Unrecognized key")]);
    }

    #[test]
    fn update_rejects_null_for_optional_field() {
        let raw = object(json!({"name": null}));

        let err = validate(&update_schema(), &raw, None).unwrap_err();

        assert_eq!(
            err.errors,
            vec![FieldError::new("name", "Expected string, received null")]
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let raw = object(json!({"name": "Ana", "email": "a@x.com"}));
        let before = raw.clone();

        let _ = validate(&create_schema(), &raw, Some("ACT-1-ABCDEF"));

        assert_eq!(raw, before);
    }

    #[test]
    fn validation_error_display_lists_issues() {
        let err = ValidationError {
            errors: vec![
                FieldError::new("name", "Required"),
                FieldError::new("email", "Invalid email"),
            ],
        };

        assert_eq!(
            err.to_string(),
            "Validation error: name: Required; email: Invalid email"
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a@x.com"));
        assert!(is_email("first.last+tag@sub.example.org"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a@x"));
        assert!(!is_email(".a@x.com"));
        assert!(!is_email("a..b@x.com"));
        assert!(!is_email("a.@x.com"));
        assert!(!is_email("@x.com"));
    }
}
