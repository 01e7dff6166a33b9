//! Admin session cookie extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use leaddesk_core::admin_gate::{PUBLIC_ENTRY_POINT, SESSION_COOKIE_NAME};
use tower_cookies::Cookies;

use crate::state::AppState;

/// Proof that the request carries a cookie matching the admin secret.
///
/// Requests without one are not errors: they are redirected to the public
/// entry point.
///
/// ```ignore
/// async fn admin_page(_admin: AdminSession) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let session = cookies
            .get(SESSION_COOKIE_NAME)
            .map(|c| c.value().to_string());

        if state.admin_gate.verify_session(session.as_deref()).is_granted() {
            Ok(AdminSession)
        } else {
            tracing::debug!(
                path = %parts.uri.path(),
                has_cookie = session.is_some(),
                "Admin session rejected, redirecting",
            );
            Err(Redirect::temporary(PUBLIC_ENTRY_POINT).into_response())
        }
    }
}
