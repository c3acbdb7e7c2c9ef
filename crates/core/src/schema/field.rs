//! Declarative description of an entity's fields.
//!
//! A [`FieldSet`] is pure data: it is built once and never mutated afterwards.
//! Validation rules are derived from it per [`SchemaMode`](super::SchemaMode).

use serde::Serialize;

/// Primitive type of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Any JSON string.
    String,
    /// A JSON string shaped like an email address.
    Email,
}

impl FieldType {
    /// Name used in validation issues ("Expected string").
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Email => "email",
        }
    }
}

/// Description of a single entity field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
    /// Whether the field must be present when the entity is created.
    pub required_in_create: bool,
    /// Whether the field is the store's primary key.
    pub key: bool,
}

impl FieldDescriptor {
    /// Create a field that is required on creation.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required_in_create: true,
            key: false,
        }
    }

    /// Make the field optional on creation.
    pub fn optional(mut self) -> Self {
        self.required_in_create = false;
        self
    }

    /// Mark the field as the primary key.
    pub fn as_key(mut self) -> Self {
        self.key = true;
        self
    }
}

/// Ordered, immutable set of field descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<FieldDescriptor>,
}

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. A later field with the same name replaces the earlier one
    /// in place, keeping the original position.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Append a required string field acting as the primary key.
    pub fn with_key(self, name: impl Into<String>) -> Self {
        self.with_field(FieldDescriptor::new(name, FieldType::String).as_key())
    }

    /// The primary key field, if the set declares one.
    pub fn key_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key)
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Name of the identifier attribute of stored items.
pub const ID_FIELD: &str = "id";

/// Field set of the items entity: `id`, `name` and `email`.
pub fn item_fields() -> FieldSet {
    FieldSet::new()
        .with_key(ID_FIELD)
        .with_field(FieldDescriptor::new("name", FieldType::String))
        .with_field(FieldDescriptor::new("email", FieldType::Email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_fields_are_declared_in_order() {
        let fields = item_fields();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["id", "name", "email"]);
    }

    #[test]
    fn item_fields_use_id_as_key() {
        let fields = item_fields();

        let key = fields.key_field().unwrap();
        assert_eq!(key.name, ID_FIELD);
        assert_eq!(key.field_type, FieldType::String);
        assert!(key.required_in_create);
    }

    #[test]
    fn with_field_replaces_duplicate_in_place() {
        let fields = FieldSet::new()
            .with_field(FieldDescriptor::new("a", FieldType::String))
            .with_field(FieldDescriptor::new("b", FieldType::String))
            .with_field(FieldDescriptor::new("a", FieldType::Email).optional());

        assert_eq!(fields.len(), 2);
        let a = fields.iter().find(|f| f.name == "a").unwrap();
        assert_eq!(a.field_type, FieldType::Email);
        assert!(!a.required_in_create);
        assert_eq!(fields.iter().next().unwrap().name, "a");
    }

    #[test]
    fn set_without_key_has_no_key_field() {
        let fields = FieldSet::new().with_field(FieldDescriptor::new("name", FieldType::String));

        assert!(fields.key_field().is_none());
    }
}
