//! DynamoDB storage backend implementation.
//!
//! Items live in a single table keyed by `id` (S). The table is created by
//! `cargo xtask dynamodb deploy`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
