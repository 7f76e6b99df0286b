use crate::core::errors::UserServiceError;
use crate::core::models::user::{User, UserPayload};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

// Map and counter live under one lock so id assignment and insertion cannot
// interleave with another writer.
#[derive(Default)]
struct UserTable {
    users: HashMap<u64, User>,
    last_id: u64,
}

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_users(&self) -> Vec<User> {
        let table = self.table.read().await;
        table.users.values().cloned().collect()
    }

    async fn get_user(&self, user_id: u64) -> Result<User, UserServiceError> {
        let table = self.table.read().await;
        table
            .users
            .get(&user_id)
            .cloned()
            .ok_or(UserServiceError::UserNotFound(user_id))
    }

    async fn create_user(&self, payload: UserPayload) -> User {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let user = User::new(table.last_id, payload);
        table.users.insert(user.id, user.clone());
        user
    }

    async fn update_user(&self, patch: UserPayload) -> Result<User, UserServiceError> {
        let mut table = self.table.write().await;
        let user_id = patch.id;
        let user = table
            .users
            .get_mut(&user_id)
            .ok_or(UserServiceError::UserNotFound(user_id))?;
        user.apply(patch);
        Ok(user.clone())
    }

    async fn delete_user(&self, user_id: u64) -> Result<(), UserServiceError> {
        let mut table = self.table.write().await;
        table
            .users
            .remove(&user_id)
            .map(|_| ())
            .ok_or(UserServiceError::UserNotFound(user_id))
    }
}
