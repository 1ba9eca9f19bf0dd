use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tinylink_shortener::ShortenerError;
use tracing::{debug, error};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("short code is required")]
    MissingShortCode,
    #[error("short code not found")]
    NotFound(String),
    #[error("internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::MissingShortCode => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(error: ShortenerError) -> Self {
        match error {
            ShortenerError::InvalidInput(message) => AppError::InvalidInput(message),
            ShortenerError::NotFound(code) => AppError::NotFound(code),
            other @ (ShortenerError::CodeSpaceExhausted { .. } | ShortenerError::Storage(_)) => {
                AppError::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Internal(source) => error!(error = %source, "request failed"),
            AppError::NotFound(code) => debug!(code = %code, "short code not found"),
            other => debug!(error = %other, "rejected request"),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortener_errors_map_to_status() {
        let cases = [
            (
                ShortenerError::InvalidInput("url cannot be empty".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ShortenerError::NotFound("abc".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ShortenerError::CodeSpaceExhausted {
                    url: "https://example.com".to_string(),
                    attempts: 16,
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ShortenerError::Storage("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(AppError::from(error).status(), status);
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let error = AppError::from(ShortenerError::Storage("secret".to_string()));
        assert_eq!(error.to_string(), "internal server error");
    }
}
