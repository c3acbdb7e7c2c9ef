//! Pretty output formatting.

use serde_json::Value;

use crate::client::{Item, ItemPage};

/// Format an item for display: its `id` first, then every other field.
pub fn format_item(item: &Item) -> String {
    let id = item.get("id").and_then(Value::as_str).unwrap_or("<no id>");
    let mut output = id.to_string();
    for (name, value) in item.iter().filter(|(name, _)| name.as_str() != "id") {
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        output.push_str(&format!("\n  {}: {}", name, value));
    }
    output
}

/// Format a page of items for display, with the cursor for the next page.
pub fn format_page(page: &ItemPage) -> String {
    if page.items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", page.items.len());
    output.push_str(&"-".repeat(40));
    for item in &page.items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    if let Some(cursor) = &page.last_evaluated_key {
        output.push_str(&format!("\nNext page: --cursor '{}'", cursor));
    }
    output
}
