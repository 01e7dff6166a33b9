//! Route definitions for the `/admin` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{self, admin};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /login          -> login (any other method: 405 JSON)
/// GET  /leads          -> list_leads (admin cookie)
/// GET  /leads/export   -> export_leads (admin cookie)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            post(admin::login).fallback(handlers::method_not_allowed),
        )
        .route("/leads", get(admin::list_leads))
        .route("/leads/export", get(admin::export_leads))
}
