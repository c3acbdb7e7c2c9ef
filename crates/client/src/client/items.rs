//! Item API operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ItemstoreClient;
use crate::error::{ClientError, Result};

/// An item as returned by the server.
pub type Item = Map<String, Value>;

/// One page of a list request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    /// Cursor for the next page, `None` on the last page.
    #[serde(rename = "lastEvaluatedKey")]
    pub last_evaluated_key: Option<String>,
}

#[derive(Deserialize)]
struct ItemEnvelope {
    item: Item,
}

#[derive(Deserialize)]
struct ReadEnvelope {
    body: Item,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    message: String,
}

impl ItemstoreClient {
    /// Create a new item. The server assigns its `id`.
    pub async fn create_item(&self, fields: &Item) -> Result<Item> {
        let response = self
            .client
            .post(self.url("/items"))
            .json(fields)
            .send()
            .await?;
        let envelope: ItemEnvelope = self.handle_response(response, None).await?;
        Ok(envelope.item)
    }

    /// List one page of items.
    pub async fn list_items(&self, limit: Option<u32>, cursor: Option<&str>) -> Result<ItemPage> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("lastEvaluatedKey", cursor.to_string()));
        }

        let response = self
            .client
            .get(self.url("/items"))
            .query(&query)
            .send()
            .await?;
        self.handle_response(response, None).await
    }

    /// Get item by ID.
    pub async fn get_item(&self, id: &str) -> Result<Item> {
        let response = self
            .client
            .get(self.item_url(id)?)
            .send()
            .await?;
        let envelope: ReadEnvelope = self.handle_response(response, Some(id)).await?;
        Ok(envelope.body)
    }

    /// Update some fields of an item and return its full new state.
    pub async fn update_item(&self, id: &str, fields: &Item) -> Result<Item> {
        if fields.is_empty() {
            return Err(ClientError::InvalidInput(
                "nothing to update, pass at least one field".to_string(),
            ));
        }

        let response = self
            .client
            .put(self.item_url(id)?)
            .json(fields)
            .send()
            .await?;
        let envelope: ItemEnvelope = self.handle_response(response, Some(id)).await?;
        Ok(envelope.item)
    }

    /// Delete item by ID. Returns the server's confirmation message.
    pub async fn delete_item(&self, id: &str) -> Result<String> {
        let response = self
            .client
            .delete(self.item_url(id)?)
            .send()
            .await?;
        let envelope: MessageEnvelope = self.handle_response(response, Some(id)).await?;
        Ok(envelope.message)
    }
}
