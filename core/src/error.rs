use thiserror::Error;

/// Errors surfaced by the HTTP client wrapper and the resource services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered 401. The session has already been cleared
    /// and the login redirect issued by the time the caller sees this.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,

    /// Any other non-2xx answer.
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The body did not match the expected envelope or entity shape.
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// Persisted session storage could not be written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The request could not be built (bad form input, missing id...).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Short text suitable for the login form, where the page has no
    /// context prefix of its own.
    pub fn login_message(&self) -> String {
        match self {
            ApiError::Unauthorized | ApiError::Status { status: 400 | 403 | 404, .. } => {
                "Invalid email or password".to_string()
            }
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

/// Errors raised by [`crate::storage::SessionStorage`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
}
