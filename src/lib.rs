pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use api::{api_routes, new_handler};
pub use config::{CONFIG, NotFoundPolicy};
pub use crate::core::errors::UserServiceError;
pub use crate::core::models::user::{User, UserPayload};
pub use crate::core::services::UserService;
pub use infrastructure::storage::{Storage, in_memory::InMemoryStorage};

#[cfg(test)]
mod tests;
