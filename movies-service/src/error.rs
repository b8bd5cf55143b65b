use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::retry::Retryable;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no movie info available for id {0}")]
    NotFound(String),
    #[error("{message}")]
    Client { status: u16, message: String },
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Retryable for AppError {
    // only 5xx and timeout-class transport failures are worth another attempt
    fn is_retryable(&self) -> bool {
        match self {
            AppError::Server { .. } => true,
            AppError::Transport(err) => err.is_timeout() || err.is_connect(),
            AppError::NotFound(_) | AppError::Client { .. } => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(id) => {
                tracing::debug!(id = %id, "movie info not found");
                StatusCode::NOT_FOUND.into_response()
            },
            AppError::Client { status, message } => (status_code(status), message).into_response(),
            AppError::Server { status, message } => {
                tracing::warn!(status = status, "upstream server failure");
                (status_code(status), message).into_response()
            },
            AppError::Transport(err) => {
                tracing::error!(error = %err, "upstream request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "upstream request failed".to_string())
                    .into_response()
            },
        }
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        let err = AppError::Server { status: 500, message: "boom".to_string() };
        assert!(err.is_retryable());
    }

    #[test]
    fn not_found_and_client_errors_are_not_retryable() {
        assert!(!AppError::NotFound("1".to_string()).is_retryable());
        let err = AppError::Client { status: 403, message: "forbidden".to_string() };
        assert!(!err.is_retryable());
    }
}
