use std::fmt;

use serde::{Deserialize, Serialize};

/// Which kind of write a schema validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaMode {
    /// Every field is required.
    Create,
    /// Every field is optional.
    Update,
}

impl fmt::Display for SchemaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaMode::Create => write!(f, "CREATE"),
            SchemaMode::Update => write!(f, "UPDATE"),
        }
    }
}
