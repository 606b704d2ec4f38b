//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use userstore_core::storage::{RepositoryError, Result, UserRepository};
use userstore_core::user::{User, UserChanges};

/// In-memory storage backend.
///
/// Mirrors the DynamoDB write semantics: puts overwrite, updates upsert and
/// deletes of missing ids succeed. An empty key is rejected the way DynamoDB
/// rejects an empty string partition key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_key(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(RepositoryError::QueryFailed(
            "The AttributeValue for a key attribute cannot contain an empty string value"
                .to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn list_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        check_key(id)?;
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn put_user(&self, user: &User) -> Result<()> {
        check_key(&user.id)?;
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update_user(&self, id: &str, changes: &UserChanges) -> Result<()> {
        check_key(id)?;
        let mut users = self.users.write().await;
        users.insert(id.to_string(), changes.clone().into_user(id));
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        check_key(id)?;
        let mut users = self.users.write().await;
        users.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_overwrites_existing_user() {
        let repo = InMemoryRepository::new();

        repo.put_user(&User::new("1", "Alice", 30)).await.unwrap();
        repo.put_user(&User::new("1", "Alicia", 31)).await.unwrap();

        assert_eq!(
            repo.get_user("1").await.unwrap(),
            Some(User::new("1", "Alicia", 31))
        );
        assert_eq!(repo.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_creates_missing_user() {
        let repo = InMemoryRepository::new();
        let changes = UserChanges {
            name: "Bob".to_string(),
            age: 40,
        };

        repo.update_user("2", &changes).await.unwrap();

        assert_eq!(
            repo.get_user("2").await.unwrap(),
            Some(User::new("2", "Bob", 40))
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRepository::new();
        repo.put_user(&User::new("3", "Carol", 25)).await.unwrap();

        repo.delete_user("3").await.unwrap();
        repo.delete_user("3").await.unwrap();

        assert_eq!(repo.get_user("3").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_key_is_rejected() {
        let repo = InMemoryRepository::new();
        let changes = UserChanges {
            name: "Nobody".to_string(),
            age: 0,
        };

        assert!(matches!(
            repo.put_user(&User::new("", "Nobody", 0)).await,
            Err(RepositoryError::QueryFailed(_))
        ));
        assert!(matches!(
            repo.update_user("", &changes).await,
            Err(RepositoryError::QueryFailed(_))
        ));
        assert!(repo.get_user("").await.is_err());
        assert!(repo.delete_user("").await.is_err());
        assert!(repo.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_users().await.unwrap().is_empty());
    }
}
