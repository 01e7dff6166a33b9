//! Route definitions for the `/leads` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::{self, leads};
use crate::state::AppState;

/// Routes mounted at `/leads`.
///
/// ```text
/// POST /    -> submit_lead
/// *    /    -> 405 JSON
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(leads::submit_lead).fallback(handlers::method_not_allowed),
    )
}
