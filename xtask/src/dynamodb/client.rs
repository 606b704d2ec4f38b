//! AWS SDK client setup (Imperative Shell).

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{KeyType, TableStatus as SdkTableStatus};
use aws_sdk_dynamodb::Client;

/// AWS client configuration.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &AwsConfig) -> Result<Client> {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Ok(Client::new(&sdk_config))
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let Some(table) = response.table() else {
                return Ok(None);
            };

            let partition_key = table
                .key_schema()
                .iter()
                .find(|key| key.key_type() == &KeyType::Hash)
                .map(|key| key.attribute_name().to_string());

            Ok(Some(TableState {
                status: table_status(table.table_status()),
                partition_key,
            }))
        }
        Err(err) => match err.into_service_error() {
            DescribeTableError::ResourceNotFoundException(_) => Ok(None),
            err => Err(DynamodbError::AwsSdk(err.to_string())),
        },
    }
}

/// Maps the reported table status; anything not known to serve traffic is unusable.
fn table_status(status: Option<&SdkTableStatus>) -> TableStatus {
    match status {
        Some(SdkTableStatus::Active) => TableStatus::Active,
        Some(SdkTableStatus::Creating) => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Unusable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_statuses_are_mapped() {
        assert_eq!(table_status(Some(&SdkTableStatus::Active)), TableStatus::Active);
        assert_eq!(table_status(Some(&SdkTableStatus::Creating)), TableStatus::Creating);
        assert_eq!(table_status(Some(&SdkTableStatus::Updating)), TableStatus::Updating);
        assert_eq!(table_status(Some(&SdkTableStatus::Deleting)), TableStatus::Deleting);
    }

    #[test]
    fn test_archived_and_locked_tables_are_unusable() {
        for status in [
            SdkTableStatus::Archived,
            SdkTableStatus::Archiving,
            SdkTableStatus::InaccessibleEncryptionCredentials,
        ] {
            assert_eq!(table_status(Some(&status)), TableStatus::Unusable, "{status:?}");
        }
        assert_eq!(table_status(None), TableStatus::Unusable);
    }
}
