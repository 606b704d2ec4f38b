//! Attribute names of a stored user item.
//!
//! Shared by the server's DynamoDB backend and the seeding tool so both
//! write the same item shape.

/// Partition key attribute.
pub const ATTR_ID: &str = "id";
pub const ATTR_NAME: &str = "name";
pub const ATTR_AGE: &str = "age";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;

    #[test]
    fn test_attribute_names_match_json_fields() {
        let json = serde_json::to_value(User::new("1", "Alice", 30)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        for attr in [ATTR_ID, ATTR_NAME, ATTR_AGE] {
            assert!(object.contains_key(attr), "missing {attr}");
        }
    }
}
