use crate::core::errors::UserServiceError;
use crate::core::models::user::{User, UserPayload};
use async_trait::async_trait;

/// Keyed user store with system-assigned ids.
///
/// Every method is atomic: it either fully applies or has no effect. The only
/// failure is `UserServiceError::UserNotFound`.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_users(&self) -> Vec<User>;
    async fn get_user(&self, user_id: u64) -> Result<User, UserServiceError>;
    async fn create_user(&self, payload: UserPayload) -> User;
    async fn update_user(&self, patch: UserPayload) -> Result<User, UserServiceError>;
    async fn delete_user(&self, user_id: u64) -> Result<(), UserServiceError>;
}

pub mod in_memory;
