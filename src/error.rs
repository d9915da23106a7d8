use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::FormRejection;
use axum::{http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum LinkPageError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Form error: {0}")]
    FormError(#[from] FormRejection),

    #[error("Multipart error: {0}")]
    MultipartError(#[from] MultipartError),

    #[error("Multipart request error: {0}")]
    MultipartRejection(#[from] MultipartRejection),

    #[error("{0}")]
    InvalidInput(String),
}

impl IntoResponse for LinkPageError {
    fn into_response(self) -> axum::response::Response {
        match self {
            LinkPageError::FormError(rejection) => rejection.into_response(),
            LinkPageError::MultipartError(err) => err.into_response(),
            LinkPageError::MultipartRejection(rejection) => rejection.into_response(),
            LinkPageError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            err @ (LinkPageError::DatabaseError(_) | LinkPageError::IoError(_)) => {
                error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error",
                )
                    .into_response()
            }
        }
    }
}
