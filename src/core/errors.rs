use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserServiceError {
    /// No user is stored under the given id
    #[error("No User ID : {0}")]
    UserNotFound(u64),

    /// Path id is not a non-negative decimal integer
    #[error("{0}")]
    InvalidId(String),

    /// Request body could not be decoded as a user
    #[error("{0}")]
    InvalidBody(String),
}
