use crate::core::errors::UserServiceError;
use crate::core::models::user::{User, UserPayload};
use crate::infrastructure::storage::Storage;
use tracing::{debug, info};

/// Parses a `/users/{id}` path segment. Only ASCII digits are accepted, so
/// signs and whitespace are rejected even where `u64::from_str` would allow them.
pub fn parse_user_id(raw: &str) -> Result<u64, UserServiceError> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UserServiceError::InvalidId(format!(
            "invalid user id {:?}: invalid digit found in string",
            raw
        )));
    }
    raw.parse()
        .map_err(|e| UserServiceError::InvalidId(format!("invalid user id {:?}: {}", raw, e)))
}

/// Decodes the first JSON value of a request body regardless of its declared
/// content type. Anything after that value is ignored.
pub fn decode_payload(body: &[u8]) -> Result<UserPayload, UserServiceError> {
    match serde_json::Deserializer::from_slice(body).into_iter::<UserPayload>().next() {
        Some(payload) => payload.map_err(|e| UserServiceError::InvalidBody(e.to_string())),
        None => Err(UserServiceError::InvalidBody("EOF while parsing a value".to_string())),
    }
}

pub struct UserService<S: Storage> {
    storage: S,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S) -> Self {
        UserService { storage }
    }

    pub async fn list_users(&self) -> Vec<User> {
        let users = self.storage.list_users().await;
        debug!(count = users.len(), "listed users");
        users
    }

    pub async fn get_user(&self, user_id: u64) -> Result<User, UserServiceError> {
        debug!(user_id, "fetching user");
        self.storage.get_user(user_id).await
    }

    pub async fn create_user(&self, payload: UserPayload) -> User {
        let user = self.storage.create_user(payload).await;
        info!(user_id = user.id, "user created");
        user
    }

    /// Applies `patch` to the user named by `patch.id`.
    pub async fn update_user(&self, patch: UserPayload) -> Result<User, UserServiceError> {
        let user = self.storage.update_user(patch).await?;
        info!(user_id = user.id, "user updated");
        Ok(user)
    }

    pub async fn delete_user(&self, user_id: u64) -> Result<(), UserServiceError> {
        self.storage.delete_user(user_id).await?;
        info!(user_id, "user deleted");
        Ok(())
    }
}
