//! Route definitions for the `/pricing` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pricing;
use crate::state::AppState;

/// Routes mounted at `/pricing`.
///
/// ```text
/// GET  /rates      -> get_rates
/// POST /estimate   -> preview_estimate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rates", get(pricing::get_rates))
        .route("/estimate", post(pricing::preview_estimate))
}
