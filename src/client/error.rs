use thiserror::Error;

use crate::models::ValidationError;
use crate::storage::StorageError;

/// Everything a call through the data-access layer can fail with.
///
/// `Display` of [`ApiError::Status`] is the server's own text so callers can
/// show it to the user verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Local storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(e)
        }
    }
}

impl ApiError {
    /// HTTP status for server-side failures, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_server_text_verbatim() {
        let err = ApiError::Status {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(409));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn validation_error_keeps_field_name() {
        let err: ApiError = ValidationError::new("memberCount", "6 exceeds maxMembers 5").into();
        assert_eq!(err.to_string(), "Validation failed: memberCount: 6 exceeds maxMembers 5");
        assert_eq!(err.status(), None);
    }
}
