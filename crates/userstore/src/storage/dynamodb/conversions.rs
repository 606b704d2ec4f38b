//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and users.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use userstore_core::storage::RepositoryError;
use userstore_core::user::User;

pub use userstore_core::user::{ATTR_AGE, ATTR_ID, ATTR_NAME};

/// Sets `name` and `age`, leaving any other attribute untouched.
pub const UPDATE_EXPRESSION: &str = "SET #n = :n, #a = :a";

/// Build the primary key value for a user id.
pub fn user_key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

/// Encode an age as a DynamoDB number.
pub fn age_value(age: i64) -> AttributeValue {
    AttributeValue::N(age.to_string())
}

/// Convert a User to DynamoDB item.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), user_key(&user.id));
    item.insert(ATTR_NAME.to_string(), AttributeValue::S(user.name.clone()));
    item.insert(ATTR_AGE.to_string(), age_value(user.age));

    item
}

/// Convert a DynamoDB item to User.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> Result<User, RepositoryError> {
    Ok(User {
        id: get_string(item, ATTR_ID)?,
        name: get_string(item, ATTR_NAME)?,
        age: get_integer(item, ATTR_AGE)?,
    })
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required integer attribute stored as a DynamoDB number.
fn get_integer(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| {
            RepositoryError::InvalidData(format!("Missing or invalid field: {}", key))
        })?;

    n.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid integer {}: {}", key, e)))
}
