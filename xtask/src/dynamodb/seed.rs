//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use userstore_core::user::{User, ATTR_AGE, ATTR_ID, ATTR_NAME};

/// BatchWriteItem accepts at most 25 requests per call.
const BATCH_SIZE: usize = 25;

const SEED_NAMES: [&str; 10] = [
    "Alice", "Bruno", "Chiara", "Dmitri", "Esther", "Farid", "Greta", "Hiro", "Ines", "Jonas",
];

/// Generate demo users with stable ids (`user-001`, `user-002`, ...).
pub fn generate_seed_users(count: u32) -> Vec<User> {
    (0..count as usize)
        .map(|i| {
            let name = SEED_NAMES[i % SEED_NAMES.len()];
            let age = 18 + (i as i64 * 7) % 60;
            User::new(format!("user-{:03}", i + 1), name, age)
        })
        .collect()
}

/// Convert User to DynamoDB item.
fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ATTR_ID.to_string(), AttributeValue::S(user.id.clone())),
        (ATTR_NAME.to_string(), AttributeValue::S(user.name.clone())),
        (ATTR_AGE.to_string(), AttributeValue::N(user.age.to_string())),
    ])
}

/// Insert users into DynamoDB, returning how many were accepted.
pub async fn seed_users(client: &Client, table_name: &str, users: &[User]) -> Result<u32> {
    let mut inserted = 0;

    for chunk in users.chunks(BATCH_SIZE) {
        let write_requests = chunk
            .iter()
            .map(|user| {
                let put = PutRequest::builder()
                    .set_item(Some(user_to_item(user)))
                    .build()
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
                Ok(WriteRequest::builder().put_request(put).build())
            })
            .collect::<Result<Vec<_>>>()?;

        let response = client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        let unprocessed = response
            .unprocessed_items()
            .and_then(|items| items.get(table_name))
            .map_or(0, Vec::len);

        inserted += (chunk.len() - unprocessed) as u32;
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_seed_users_ids_are_sequential() {
        let users = generate_seed_users(12);

        assert_eq!(users.len(), 12);
        assert_eq!(users[0].id, "user-001");
        assert_eq!(users[11].id, "user-012");
        assert_eq!(users[10].name, users[0].name);
    }

    #[test]
    fn test_generate_seed_users_ages_are_adults() {
        assert!(generate_seed_users(100)
            .iter()
            .all(|user| (18..78).contains(&user.age)));
    }

    #[test]
    fn test_generate_zero_users() {
        assert!(generate_seed_users(0).is_empty());
    }

    #[test]
    fn test_user_to_item_matches_store_shape() {
        let item = user_to_item(&User::new("user-001", "Alice", 18));

        assert_eq!(item.get(ATTR_ID).unwrap().as_s().unwrap(), "user-001");
        assert_eq!(item.get(ATTR_NAME).unwrap().as_s().unwrap(), "Alice");
        assert_eq!(item.get(ATTR_AGE).unwrap().as_n().unwrap(), "18");
    }

    #[test]
    fn test_user_to_item_has_only_stored_attributes() {
        let item = user_to_item(&User::new("user-002", "Bruno", 25));

        let mut keys: Vec<&str> = item.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["age", "id", "name"]);
    }
}
