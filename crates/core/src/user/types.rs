use serde::{Deserialize, Serialize};

/// A user record, keyed by a caller-supplied `id`.
///
/// Every field falls back to its zero value when missing from the JSON
/// payload, so `{}` decodes to a user with an empty id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i64,
}

impl User {
    /// Creates a new user.
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    /// Returns the mutable attributes of this user.
    pub fn changes(&self) -> UserChanges {
        UserChanges {
            name: self.name.clone(),
            age: self.age,
        }
    }
}

/// The attributes an update is allowed to set.
///
/// The `id` is never part of an update: it comes from the request path.
/// Unknown fields (including a body `id`) are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserChanges {
    pub name: String,
    pub age: i64,
}

impl UserChanges {
    /// Builds the full record these changes produce for `id`.
    pub fn into_user(self, id: impl Into<String>) -> User {
        User {
            id: id.into(),
            name: self.name,
            age: self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_missing_fields_as_zero_values() {
        let user: User = serde_json::from_str("{}").unwrap();
        assert_eq!(user, User::new("", "", 0));
    }

    #[test]
    fn test_user_serializes_all_fields() {
        let user = User::new("1", "Alice", 30);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "1", "name": "Alice", "age": 30})
        );
    }

    #[test]
    fn test_user_rejects_wrong_field_types() {
        assert!(serde_json::from_str::<User>(r#"{"id":"1","age":"thirty"}"#).is_err());
        assert!(serde_json::from_str::<User>(r#"{"id":1}"#).is_err());
    }

    #[test]
    fn test_changes_ignore_body_id() {
        let changes: UserChanges =
            serde_json::from_str(r#"{"id":"other","name":"Bob","age":41}"#).unwrap();
        assert_eq!(changes.into_user("7"), User::new("7", "Bob", 41));
    }

    #[test]
    fn test_changes_round_trip_through_user() {
        let user = User::new("9", "Carol", 22);
        assert_eq!(user.changes().into_user(user.id.clone()), user);
    }
}
