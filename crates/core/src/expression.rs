//! Update expression construction.
//!
//! A validated partial record becomes a `SET` instruction where every
//! attribute name goes through a `#name` placeholder (so reserved words such
//! as `name` are safe) and every value through a `:name` placeholder (so no
//! literal ends up inside the expression string).

use serde::Serialize;
use serde_json::Value;

use crate::schema::ValidatedRecord;
use crate::storage::StoreKey;

/// Storage-agnostic partial-attribute assignment.
///
/// `set_clauses`, `attribute_names` and `attribute_values` are built together
/// and always have the same length, entry `i` of each describing the same
/// attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpression {
    key: StoreKey,
    set_clauses: Vec<String>,
    attribute_names: Vec<(String, String)>,
    attribute_values: Vec<(String, Value)>,
}

impl UpdateExpression {
    /// Key of the item to update.
    pub fn key(&self) -> &StoreKey {
        &self.key
    }

    /// `"#attr = :attr"` clauses in record order.
    pub fn set_clauses(&self) -> &[String] {
        &self.set_clauses
    }

    /// `"#attr"` placeholder to attribute name.
    pub fn attribute_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attribute_names
            .iter()
            .map(|(placeholder, name)| (placeholder.as_str(), name.as_str()))
    }

    /// `":attr"` placeholder to value.
    pub fn attribute_values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attribute_values
            .iter()
            .map(|(placeholder, value)| (placeholder.as_str(), value))
    }

    /// `(attribute name, value)` pairs, resolved through the placeholders.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attribute_names
            .iter()
            .zip(&self.attribute_values)
            .map(|((_, name), (_, value))| (name.as_str(), value))
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.set_clauses.len()
    }

    /// An empty expression must never reach the store: `SET` needs at least
    /// one assignment.
    pub fn is_empty(&self) -> bool {
        self.set_clauses.is_empty()
    }

    /// Rendered expression, e.g. `SET #name = :name, #email = :email`.
    pub fn expression(&self) -> String {
        format!("SET {}", self.set_clauses.join(", "))
    }
}

/// Build the update expression assigning every entry of `record` on the item
/// identified by `id`.
///
/// Clause order follows the record's iteration order. An empty record yields
/// an empty expression; rejecting it is up to the caller.
pub fn build(record: &ValidatedRecord, id: &str) -> UpdateExpression {
    let mut set_clauses = Vec::with_capacity(record.len());
    let mut attribute_names = Vec::with_capacity(record.len());
    let mut attribute_values = Vec::with_capacity(record.len());

    for (field, value) in record.iter() {
        let name_placeholder = format!("#{field}");
        let value_placeholder = format!(":{field}");

        set_clauses.push(format!("{name_placeholder} = {value_placeholder}"));
        attribute_names.push((name_placeholder, field.clone()));
        attribute_values.push((value_placeholder, value.clone()));
    }

    UpdateExpression {
        key: StoreKey::for_id(id),
        set_clauses,
        attribute_names,
        attribute_values,
    }
}
