use std::fmt::Display;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use campus_types::api::ErrorBody;

/// Every failure a handler can surface. The response body is always
/// `{"detail": ...}` with a fixed message; internal causes are logged, never
/// returned.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Field required: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),

    #[error("Malformed form body: {0}")]
    BadForm(String),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidField(_) | ApiError::BadForm(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Collapse any storage/file/hash failure into a generic 500, logging the cause.
pub trait OrInternal<T> {
    fn or_internal(self, detail: &'static str) -> Result<T, ApiError>;
}

impl<T, E: Display> OrInternal<T> for Result<T, E> {
    fn or_internal(self, detail: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| {
            error!("{}: {:#}", detail, e);
            ApiError::Internal(detail)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(ApiError::MissingField("email").status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::Unauthorized("Invalid credentials").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Internal("Login failed").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_detail_hides_cause() {
        let result: Result<(), anyhow::Error> = Err(anyhow::anyhow!("disk full at /var/campus"));
        let err = result.or_internal("Registration failed").unwrap_err();
        assert_eq!(err.to_string(), "Registration failed");
    }
}
