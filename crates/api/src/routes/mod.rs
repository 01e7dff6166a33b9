pub mod admin;
pub mod leads;
pub mod pricing;

use axum::routing::get;
use axum::Router;

use crate::handlers::system;
use crate::state::AppState;

/// Routes served at the root, outside the versioned API.
///
/// ```text
/// GET /health                  liveness plus store reachability
/// ```
pub fn root_routes() -> Router<AppState> {
    Router::new().route("/health", get(system::health))
}

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET  /env-check              configuration presence report
///
/// POST /leads                  submit a lead (public)
///
/// GET  /pricing/rates          active rate table
/// POST /pricing/estimate       live estimate preview
///
/// POST /admin/login            exchange the admin secret for a cookie
/// GET  /admin/leads            paginated listing (admin cookie)
/// GET  /admin/leads/export     CSV export of the listing page (admin cookie)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/env-check", get(system::env_check))
        .nest("/leads", leads::router())
        .nest("/pricing", pricing::router())
        .nest("/admin", admin::router())
}
