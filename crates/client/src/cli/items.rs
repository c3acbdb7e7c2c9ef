//! Item CLI commands.

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List one page of items.
    List {
        /// Page size.
        #[arg(long)]
        limit: Option<u32>,
        /// Cursor printed by the previous page.
        #[arg(long)]
        cursor: Option<String>,
    },
    /// Create a new item.
    Create {
        /// Item name.
        #[arg(long)]
        name: String,
        /// Item email.
        #[arg(long)]
        email: String,
    },
    /// Get item by ID.
    Get {
        /// Item ID.
        id: String,
    },
    /// Update an item.
    Update {
        /// Item ID.
        id: String,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New email.
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete item by ID.
    Delete {
        /// Item ID.
        id: String,
    },
}

/// Collect the provided fields into a request body, skipping absent ones.
pub fn fields(pairs: [(&str, Option<String>); 2]) -> Map<String, Value> {
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), Value::String(v))))
        .collect()
}
