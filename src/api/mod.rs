pub mod handlers;
pub mod models;
pub mod openapi;

pub use handlers::{api_routes, new_handler};
pub use models::{ApiError, AppState};
