use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("movie info {0} not found")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
    #[error("stored movie info is not decodable: {0}")]
    Decode(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(id) => {
                tracing::debug!(id = %id, "movie info not found");
                StatusCode::NOT_FOUND.into_response()
            },
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Db(err) => {
                tracing::error!(error = %err, "database failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            },
            AppError::Decode(msg) => {
                tracing::error!(error = %msg, "stored row not decodable");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            },
        }
    }
}
