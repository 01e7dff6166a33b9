pub mod admin;
pub mod leads;
pub mod pricing;
pub mod system;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, reporting decode failures as 400 Bad Request.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Fallback for routes hit with a method they do not accept.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
