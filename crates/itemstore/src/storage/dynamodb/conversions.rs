//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and JSON items.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use itemstore_core::storage::{Item, RepositoryError, StoreKey};

// ============================================================================
// JSON -> DynamoDB
// ============================================================================

/// Convert a JSON value to a DynamoDB attribute.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(item_to_attributes(map)),
    }
}

/// Convert a JSON item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    item.iter()
        .map(|(name, value)| (name.clone(), value_to_attribute(value)))
        .collect()
}

/// Convert a store key to DynamoDB key attributes.
pub fn key_to_attributes(key: &StoreKey) -> HashMap<String, AttributeValue> {
    key.iter()
        .map(|(name, value)| (name.clone(), AttributeValue::S(value.clone())))
        .collect()
}

// ============================================================================
// DynamoDB -> JSON
// ============================================================================

/// Convert a DynamoDB attribute to a JSON value.
pub fn attribute_to_value(attribute: &AttributeValue) -> Result<Value, RepositoryError> {
    match attribute {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => attributes_to_item(map).map(Value::Object),
        other => Err(RepositoryError::Serialization(format!(
            "Unsupported attribute type: {other:?}"
        ))),
    }
}

/// Convert a DynamoDB item to a JSON item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, RepositoryError> {
    let mut names: Vec<&String> = attributes.keys().collect();
    names.sort();

    names
        .into_iter()
        .map(|name| Ok((name.clone(), attribute_to_value(&attributes[name])?)))
        .collect()
}

/// Convert a DynamoDB `LastEvaluatedKey` to a store key.
pub fn attributes_to_key(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<StoreKey, RepositoryError> {
    let pairs = attributes
        .iter()
        .map(|(name, attribute)| match attribute {
            AttributeValue::S(s) => Ok((name.clone(), s.clone())),
            other => Err(RepositoryError::Serialization(format!(
                "Key attribute '{name}' is not a string: {other:?}"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StoreKey::from_pairs(pairs))
}

fn parse_number(n: &str) -> Result<Number, RepositoryError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Number::from(u));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| RepositoryError::Serialization(format!("Invalid number: {n}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_item() -> Item {
        let Value::Object(map) = json!({
            "id": "ACT-1-ABCDEF",
            "name": "Ana",
            "email": "a@x.com",
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn test_item_round_trip() {
        let item = sample_item();

        let attributes = item_to_attributes(&item);
        let parsed = attributes_to_item(&attributes).unwrap();

        assert_eq!(Value::Object(parsed), Value::Object(item));
    }

    #[test]
    fn test_strings_become_s_attributes() {
        let attributes = item_to_attributes(&sample_item());

        assert_eq!(attributes.get("id").unwrap().as_s().unwrap(), "ACT-1-ABCDEF");
        assert_eq!(attributes.get("email").unwrap().as_s().unwrap(), "a@x.com");
    }

    #[test]
    fn test_nested_values_round_trip() {
        let value = json!({"tags": ["a", "b"], "count": 3, "ratio": 0.5, "meta": {"ok": true, "none": null}});

        let parsed = attribute_to_value(&value_to_attribute(&value)).unwrap();

        assert_eq!(parsed, value);
    }

    #[test]
    fn test_string_set_becomes_array() {
        let attribute = AttributeValue::Ss(vec!["x".to_string(), "y".to_string()]);

        assert_eq!(attribute_to_value(&attribute).unwrap(), json!(["x", "y"]));
    }

    #[test]
    fn test_invalid_number_is_serialization_error() {
        let attribute = AttributeValue::N("not-a-number".to_string());

        assert!(matches!(
            attribute_to_value(&attribute),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn test_key_round_trip() {
        let key = StoreKey::for_id("ACT-1-ABCDEF");

        let attributes = key_to_attributes(&key);
        let parsed = attributes_to_key(&attributes).unwrap();

        assert_eq!(parsed, key);
    }

    #[test]
    fn test_non_string_key_attribute_is_rejected() {
        let mut attributes = HashMap::new();
        attributes.insert("id".to_string(), AttributeValue::N("1".to_string()));

        assert!(attributes_to_key(&attributes).is_err());
    }
}
