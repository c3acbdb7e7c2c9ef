use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::ID_FIELD;

/// A stored record: attribute name to JSON value.
pub type Item = Map<String, Value>;

/// Primary key of a stored record, as the store reports it back in
/// `LastEvaluatedKey`. Attribute values are strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreKey(BTreeMap<String, String>);

impl StoreKey {
    /// Key of the record with identifier `id`.
    pub fn for_id(id: impl Into<String>) -> Self {
        Self(BTreeMap::from([(ID_FIELD.to_string(), id.into())]))
    }

    /// Build a key from raw attribute pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The identifier attribute, if present.
    pub fn id(&self) -> Option<&str> {
        self.get(ID_FIELD)
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One page of a scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Item>,
    /// Set when the scan was truncated; resume from here.
    pub last_evaluated_key: Option<StoreKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_id_uses_id_attribute() {
        let key = StoreKey::for_id("ACT-1-ABCDEF");

        assert_eq!(key.id(), Some("ACT-1-ABCDEF"));
        assert_eq!(key.iter().count(), 1);
    }

    #[test]
    fn serializes_as_plain_object() {
        let key = StoreKey::for_id("ACT-1-ABCDEF");

        assert_eq!(
            serde_json::to_string(&key).unwrap(),
            r#"{"id":"ACT-1-ABCDEF"}"#
        );
    }

    #[test]
    fn from_pairs_collects_attributes() {
        let key = StoreKey::from_pairs([("pk", "A"), ("sk", "B")]);

        assert_eq!(key.get("pk"), Some("A"));
        assert_eq!(key.get("sk"), Some("B"));
        assert_eq!(key.id(), None);
    }
}
