//! Table deployment operations (Imperative Shell).

use super::client;
use super::config::{self, TableConfig};
use super::error::{DynamodbError, Result};
use super::planning::{DeployPlan, DestroyPlan, TableStatus};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use std::time::Duration;

/// Execute a deploy plan.
pub async fn execute_deploy_plan(client: &Client, plan: &DeployPlan) -> Result<()> {
    match plan {
        DeployPlan::CreateTable { config } => {
            create_table(client, config).await?;
            wait_for_table_active(client, &config.table_name).await?;
        }
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            found,
        } => {
            return Err(DynamodbError::KeySchemaMismatch {
                table_name: table_name.clone(),
                expected: expected.clone(),
                found: found.clone(),
            });
        }
        DeployPlan::Unusable { table_name } => {
            return Err(DynamodbError::TableUnusable {
                table_name: table_name.clone(),
            });
        }
        DeployPlan::NoChanges { .. } => {
            // Nothing to do
        }
    }
    Ok(())
}

/// Execute a destroy plan.
pub async fn execute_destroy_plan(client: &Client, plan: &DestroyPlan) -> Result<()> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            delete_table(client, table_name).await?;
        }
        DestroyPlan::AlreadyGone { .. } => {
            // Nothing to do
        }
    }
    Ok(())
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(&config.partition_key.name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(&config.partition_key.name)
        .attribute_type(to_scalar_type(&config.partition_key.attribute_type))
        .build()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .billing_mode(to_billing_mode(&config.billing_mode))
        .send()
        .await
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    Ok(())
}

async fn delete_table(client: &Client, table_name: &str) -> Result<()> {
    client
        .delete_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    let max_attempts = 60;
    let delay = Duration::from_secs(2);

    for _ in 0..max_attempts {
        if let Some(state) = client::get_table_state(client, table_name).await? {
            match state.status {
                TableStatus::Active => return Ok(()),
                TableStatus::Unusable => {
                    return Err(DynamodbError::TableUnusable {
                        table_name: table_name.to_string(),
                    })
                }
                TableStatus::Creating | TableStatus::Updating | TableStatus::Deleting => {}
            }
        }
        tokio::time::sleep(delay).await;
    }

    Err(DynamodbError::TableActivationTimeout)
}

fn to_scalar_type(attr_type: &config::AttributeType) -> ScalarAttributeType {
    match attr_type {
        config::AttributeType::String => ScalarAttributeType::S,
    }
}

fn to_billing_mode(mode: &config::BillingMode) -> BillingMode {
    match mode {
        config::BillingMode::PayPerRequest => BillingMode::PayPerRequest,
    }
}
