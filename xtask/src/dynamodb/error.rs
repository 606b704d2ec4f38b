//! Error types for DynamoDB operations.

use thiserror::Error;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("Table '{table_name}' is keyed by '{found}', expected '{expected}'")]
    KeySchemaMismatch {
        table_name: String,
        expected: String,
        found: String,
    },

    #[error("Table '{table_name}' exists but is not usable")]
    TableUnusable { table_name: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Timeout waiting for table to become active")]
    TableActivationTimeout,
}
