//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use itemstore_core::expression::UpdateExpression;
use itemstore_core::schema::ID_FIELD;
use itemstore_core::storage::{
    Item, ItemRepository, RepositoryError, Result, ScanPage, StoreKey,
};

/// In-memory storage backend for testing.
///
/// Uses a `BTreeMap` keyed by item identifier, wrapped in `Arc<RwLock<_>>`
/// for thread-safe access. Data is not persisted and will be lost when the
/// repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<BTreeMap<String, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

fn key_id(key: &StoreKey) -> Result<&str> {
    key.id()
        .ok_or_else(|| RepositoryError::InvalidData(format!("key has no '{ID_FIELD}' attribute")))
}

fn item_id(item: &Item) -> Result<&str> {
    item.get(ID_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| RepositoryError::InvalidData(format!("item has no string '{ID_FIELD}'")))
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get(&self, key: &StoreKey) -> Result<Option<Item>> {
        let id = key_id(key)?;
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn put(&self, item: &Item) -> Result<()> {
        let id = item_id(item)?.to_string();
        let mut items = self.items.write().await;
        items.insert(id, item.clone());
        Ok(())
    }

    async fn update(&self, expression: &UpdateExpression) -> Result<Item> {
        let id = key_id(expression.key())?;
        let mut items = self.items.write().await;

        let item = items.entry(id.to_string()).or_insert_with(|| {
            let mut item = Item::new();
            item.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
            item
        });

        for (name, value) in expression.assignments() {
            item.insert(name.to_string(), value.clone());
        }

        Ok(item.clone())
    }

    async fn delete(&self, key: &StoreKey) -> Result<()> {
        let id = key_id(key)?;
        let mut items = self.items.write().await;
        items.remove(id);
        Ok(())
    }

    async fn scan(&self, limit: u32, start: Option<&StoreKey>) -> Result<ScanPage> {
        let lower = match start {
            Some(key) => Bound::Excluded(key_id(key)?.to_string()),
            None => Bound::Unbounded,
        };

        let items = self.items.read().await;
        let mut remaining = items.range((lower, Bound::Unbounded));

        let page: Vec<(&String, &Item)> = remaining.by_ref().take(limit as usize).collect();
        let truncated = remaining.next().is_some();

        let last_evaluated_key = match page.last() {
            Some((id, _)) if truncated => Some(StoreKey::for_id(id.as_str())),
            _ => None,
        };

        Ok(ScanPage {
            items: page.into_iter().map(|(_, item)| item.clone()).collect(),
            last_evaluated_key,
        })
    }
}
