//! DynamoDB repository implementation.
//!
//! Implements `UserRepository` from `userstore_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use userstore_core::storage::{Result, UserRepository};
use userstore_core::user::{User, UserChanges};

use super::conversions::{
    age_value, item_to_user, user_key, user_to_item, ATTR_AGE, ATTR_ID, ATTR_NAME,
    UPDATE_EXPRESSION,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Holds one SDK client for the process lifetime; the client is cheap to
/// clone and safe to share between requests.
#[derive(Debug, Clone)]
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

    /// Creates a new repository from validated configuration.
    ///
    /// Credentials come from the AWS SDK default provider chain.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn list_users(&self) -> Result<Vec<User>> {
        // The paginator follows LastEvaluatedKey until the table is exhausted.
        let items = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send()
            .try_collect()
            .await
            .map_err(map_scan_error)?;

        items.iter().map(item_to_user).collect()
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, user_key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_user(&self, user: &User) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_user(&self, id: &str, changes: &UserChanges) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, user_key(id))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#n", ATTR_NAME)
            .expression_attribute_names("#a", ATTR_AGE)
            .expression_attribute_values(":n", AttributeValue::S(changes.name.clone()))
            .expression_attribute_values(":a", age_value(changes.age))
            .send()
            .await
            .map_err(map_update_item_error)?;

        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, user_key(id))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
