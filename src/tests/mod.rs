mod config_tests;

use crate::config::NotFoundPolicy;
use crate::core::models::user::UserPayload;
use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use axum::http::StatusCode;

pub const POLICIES: [NotFoundPolicy; 2] = [NotFoundPolicy::Lenient, NotFoundPolicy::Strict];

pub fn create_test_service() -> UserService<InMemoryStorage> {
    UserService::new(InMemoryStorage::new())
}

pub fn payload(first_name: &str, last_name: &str, email: &str) -> UserPayload {
    UserPayload {
        id: 0,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        created_at: None,
    }
}

pub fn not_found_status(policy: NotFoundPolicy) -> StatusCode {
    match policy {
        NotFoundPolicy::Lenient => StatusCode::OK,
        NotFoundPolicy::Strict => StatusCode::NOT_FOUND,
    }
}
