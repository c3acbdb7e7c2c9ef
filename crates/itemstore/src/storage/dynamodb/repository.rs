//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `itemstore_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use itemstore_core::expression::UpdateExpression;
use itemstore_core::storage::{Item, ItemRepository, Result, ScanPage, StoreKey};

use super::conversions::{
    attributes_to_item, attributes_to_key, item_to_attributes, key_to_attributes,
    value_to_attribute,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn get(&self, key: &StoreKey) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(attributes_to_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update(&self, expression: &UpdateExpression) -> Result<Item> {
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(expression.key())))
            .update_expression(expression.expression())
            .return_values(ReturnValue::AllNew);

        for (placeholder, name) in expression.attribute_names() {
            request = request.expression_attribute_names(placeholder, name);
        }
        for (placeholder, value) in expression.attribute_values() {
            request = request.expression_attribute_values(placeholder, value_to_attribute(value));
        }

        let result = request.send().await.map_err(map_update_item_error)?;

        match result.attributes {
            Some(attributes) => attributes_to_item(&attributes),
            None => Ok(Item::new()),
        }
    }

    async fn delete(&self, key: &StoreKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan(&self, limit: u32, start: Option<&StoreKey>) -> Result<ScanPage> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(i32::try_from(limit).unwrap_or(i32::MAX))
            .set_exclusive_start_key(start.map(key_to_attributes))
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect::<Result<Vec<_>>>()?;

        let last_evaluated_key = result
            .last_evaluated_key
            .as_ref()
            .filter(|key| !key.is_empty())
            .map(attributes_to_key)
            .transpose()?;

        Ok(ScanPage {
            items,
            last_evaluated_key,
        })
    }
}
