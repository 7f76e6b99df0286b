use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /users` and `PUT /users`.
///
/// Missing or `null` strings decode as empty and a missing or `null` id decodes
/// as 0, so any JSON object with the right field types is accepted.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserPayload {
    /// Ignored on create; the target of an update.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Must be a timestamp when present, but is never stored.
    pub created_at: Option<DateTime<Utc>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl User {
    pub fn new(id: u64, payload: UserPayload) -> Self {
        User {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            created_at: Utc::now(),
        }
    }

    /// Sparse patch: only non-empty fields overwrite. `id` and `created_at`
    /// are never touched.
    pub fn apply(&mut self, patch: UserPayload) {
        if !patch.first_name.is_empty() {
            self.first_name = patch.first_name;
        }
        if !patch.last_name.is_empty() {
            self.last_name = patch.last_name;
        }
        if !patch.email.is_empty() {
            self.email = patch.email;
        }
    }
}
