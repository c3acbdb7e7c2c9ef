//! Schema derivation from a [`FieldSet`].
//!
//! Both schemas share the same base type rule per field; only required-ness
//! (and the presence of the key field) depends on the mode.

use super::field::{FieldSet, FieldType, ID_FIELD};
use super::mode::SchemaMode;

/// Validation rule for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field_type: FieldType,
    pub required: bool,
}

/// Concrete ruleset for one [`SchemaMode`]. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedSchema {
    mode: SchemaMode,
    rules: Vec<(String, FieldRule)>,
}

impl DerivedSchema {
    pub fn mode(&self) -> SchemaMode {
        self.mode
    }

    /// Rule for a field, `None` when the field is not part of this schema.
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find_map(|(field, rule)| (field == name).then_some(rule))
    }

    /// Iterate `(field, rule)` pairs in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(field, rule)| (field.as_str(), rule))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rule(name).is_some()
    }
}

/// Derive the validation schema for `mode` from `fields`.
///
/// - `Create` keeps each field's create-time required-ness.
/// - `Update` makes every field optional and leaves out the key field, which
///   is supplied by the caller's path rather than the payload.
pub fn derive(mode: SchemaMode, fields: &FieldSet) -> DerivedSchema {
    let rules = fields
        .iter()
        .filter(|field| mode == SchemaMode::Create || !field.key)
        .map(|field| {
            let rule = FieldRule {
                field_type: field.field_type,
                required: match mode {
                    SchemaMode::Create => field.required_in_create,
                    SchemaMode::Update => false,
                },
            };
            (field.name.clone(), rule)
        })
        .collect();

    DerivedSchema { mode, rules }
}

/// Both derived schemas of one field set, built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schemas {
    pub create: DerivedSchema,
    pub update: DerivedSchema,
    /// Name of the key attribute; pagination cursors must carry exactly this one.
    pub key: String,
}

impl Schemas {
    pub fn new(fields: &FieldSet) -> Self {
        let key = fields
            .key_field()
            .map_or_else(|| ID_FIELD.to_string(), |field| field.name.clone());

        Self {
            create: derive(SchemaMode::Create, fields),
            update: derive(SchemaMode::Update, fields),
            key,
        }
    }
}
