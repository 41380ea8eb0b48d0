use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::{MatchRequestError, ValidationError};

/// Mock backend failures. Rendered as plain-text bodies, the same
/// convention the real backend uses.
#[derive(Debug, Error)]
pub enum MockError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(String),
}

impl ResponseError for MockError {
    fn status_code(&self) -> StatusCode {
        match self {
            MockError::BadRequest(_) => StatusCode::BAD_REQUEST,
            MockError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            MockError::Forbidden(_) => StatusCode::FORBIDDEN,
            MockError::NotFound(_) => StatusCode::NOT_FOUND,
            MockError::Conflict(_) => StatusCode::CONFLICT,
            MockError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let MockError::Internal(detail) = self {
            tracing::error!("Mock backend failure: {}", detail);
        }
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

impl From<ValidationError> for MockError {
    fn from(e: ValidationError) -> Self {
        MockError::BadRequest(e.to_string())
    }
}

impl From<MatchRequestError> for MockError {
    fn from(e: MatchRequestError) -> Self {
        MockError::Conflict(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for MockError {
    fn from(e: bcrypt::BcryptError) -> Self {
        MockError::Internal(format!("password hashing failed: {}", e))
    }
}

impl From<jsonwebtoken::errors::Error> for MockError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        MockError::Internal(format!("token generation failed: {}", e))
    }
}
