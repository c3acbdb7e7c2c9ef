use async_trait::async_trait;

use crate::expression::UpdateExpression;

use super::{Item, Result, ScanPage, StoreKey};

/// Key-value store holding items.
///
/// The request pipeline only talks to the store through this trait, so
/// handlers can run against any backend (or a test double).
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its key.
    async fn get(&self, key: &StoreKey) -> Result<Option<Item>>;

    /// Stores an item, replacing any item with the same key.
    async fn put(&self, item: &Item) -> Result<()>;

    /// Applies `expression` to the item at `expression.key()` and returns
    /// every attribute of the updated item. Creates the item when it is missing.
    async fn update(&self, expression: &UpdateExpression) -> Result<Item>;

    /// Deletes the item at `key`. Deleting a missing item is not an error.
    async fn delete(&self, key: &StoreKey) -> Result<()>;

    /// Reads up to `limit` items, starting after `start` when given.
    async fn scan(&self, limit: u32, start: Option<&StoreKey>) -> Result<ScanPage>;
}
