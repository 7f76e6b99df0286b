use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::config::NotFoundPolicy;
use crate::core::errors::UserServiceError;
use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

/// Shared by every handler for the lifetime of the router.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<UserService<InMemoryStorage>>,
    pub not_found: NotFoundPolicy,
}

impl AppState {
    pub fn new(storage: InMemoryStorage, not_found: NotFoundPolicy) -> Self {
        AppState {
            service: Arc::new(UserService::new(storage)),
            not_found,
        }
    }

    pub fn reject(&self, error: UserServiceError) -> ApiError {
        ApiError {
            error,
            not_found: self.not_found,
        }
    }
}

/// A service error paired with the status convention for missing users.
#[derive(Debug)]
pub struct ApiError {
    pub error: UserServiceError,
    pub not_found: NotFoundPolicy,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error {
            UserServiceError::UserNotFound(_) => match self.not_found {
                NotFoundPolicy::Lenient => StatusCode::OK,
                NotFoundPolicy::Strict => StatusCode::NOT_FOUND,
            },
            UserServiceError::InvalidId(_) | UserServiceError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.error.to_string()).into_response()
    }
}
