use async_trait::async_trait;

use crate::user::{User, UserChanges};

use super::Result;

/// Repository for user records.
///
/// Every method maps to exactly one store operation. Writes never check for
/// prior existence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every stored user.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Gets a user by id, `None` when no record exists.
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Writes a user, replacing any record with the same id.
    async fn put_user(&self, user: &User) -> Result<()>;

    /// Sets `name` and `age` on the record keyed by `id`, creating it if absent.
    async fn update_user(&self, id: &str, changes: &UserChanges) -> Result<()>;

    /// Deletes the record keyed by `id`. Deleting a missing id succeeds.
    async fn delete_user(&self, id: &str) -> Result<()>;
}
