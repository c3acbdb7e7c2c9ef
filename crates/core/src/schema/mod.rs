//! Field descriptors, mode-dependent schema derivation and payload validation.

mod derive;
mod field;
mod mode;
mod validate;

pub use derive::{derive, DerivedSchema, FieldRule, Schemas};
pub use field::{item_fields, FieldDescriptor, FieldSet, FieldType, ID_FIELD};
pub use mode::SchemaMode;
pub use validate::{is_email, validate, FieldError, ValidatedRecord, ValidationError};
