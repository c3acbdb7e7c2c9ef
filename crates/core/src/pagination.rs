//! Pagination cursor codec and page-size parsing for list requests.
//!
//! The cursor is the store's `LastEvaluatedKey` serialized as JSON. It is
//! produced by the store, handed to the client and echoed back verbatim.

use serde_json::Value;

use crate::error::ApiError;
use crate::storage::StoreKey;

/// Page size used when the request does not carry a usable `limit`.
pub const DEFAULT_LIMIT: u32 = 10;

/// Serialize a store key into an opaque cursor.
pub fn encode_cursor(key: &StoreKey) -> String {
    // A map of strings always serializes.
    serde_json::to_string(key).unwrap_or_default()
}

/// Decode a client-supplied cursor.
///
/// Absent or blank input means "start of collection". Anything else must be
/// a JSON object holding exactly the `key` attribute as a string; every other
/// shape is a [`ApiError::MalformedCursor`].
pub fn decode_cursor(raw: Option<&str>, key: &str) -> Result<Option<StoreKey>, ApiError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ApiError::MalformedCursor(format!("not valid JSON: {e}")))?;

    let Value::Object(map) = value else {
        return Err(ApiError::MalformedCursor(
            "expected a JSON object".to_string(),
        ));
    };

    if map.is_empty() {
        return Err(ApiError::MalformedCursor(
            "key has no attributes".to_string(),
        ));
    }

    let mut pairs = Vec::with_capacity(map.len());
    for (attribute, value) in map {
        match value {
            Value::String(s) => pairs.push((attribute, s)),
            _ => {
                return Err(ApiError::MalformedCursor(format!(
                    "attribute '{attribute}' must be a string"
                )))
            }
        }
    }

    if pairs.len() != 1 || pairs[0].0 != key {
        return Err(ApiError::MalformedCursor(format!(
            "expected exactly the '{key}' attribute"
        )));
    }

    Ok(Some(StoreKey::from_pairs(pairs)))
}

/// Parse the `limit` query parameter, falling back to `default` when it is
/// absent, not an integer, or below 1.
pub fn parse_limit(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|limit| *limit >= 1)
        .unwrap_or(default)
}
