use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use leaddesk_core::error::CoreError;
use serde::Serialize;

/// Every failure a handler can report.
///
/// Domain failures arrive as [`CoreError`], store failures as `sqlx::Error`;
/// the rest are request-shape problems detected in the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Lead store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Undecodable body or missing request field.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response: `{ "error": ..., "code": ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl AppError {
    /// HTTP status plus the body describing this error.
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        let (status, code, error) = match self {
            Self::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            Self::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            Self::Store(err) => store_failure(err),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                self.to_string(),
            ),
        };
        (status, ErrorBody { error, code })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

/// Map a sqlx error onto a response.
///
/// A missing row is a 404. Anything else is a failed store operation and is
/// reported as 500 with the driver's own message, so the submitter learns
/// why the insert was refused.
fn store_failure(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    let message = match err {
        sqlx::Error::RowNotFound => {
            return (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            );
        }
        sqlx::Error::Database(db_err) => {
            tracing::error!(error = %db_err, code = ?db_err.code(), "Lead store rejected query");
            db_err.message().to_string()
        }
        other => {
            tracing::error!(error = %other, "Lead store unavailable");
            other.to_string()
        }
    };
    (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR", message)
}
