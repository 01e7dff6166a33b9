//! Handlers for the admin login and the lead listing.
//!
//! Listing endpoints sit behind [`AdminSession`]; a missing or stale cookie
//! redirects to the public entry point instead of returning an error.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use leaddesk_core::admin_gate::SessionCookie;
use leaddesk_core::csv_export::{self, LEAD_EXPORT_HEADERS};
use leaddesk_core::error::CoreError;
use leaddesk_core::pagination::{parse_page, total_pages, PageWindow, ADMIN_PAGE_SIZE};
use leaddesk_core::search::{filter_page, normalize_query};
use leaddesk_db::models::lead::{Lead, LeadPage};
use leaddesk_db::repositories::LeadRepo;
use leaddesk_db::DbPool;
use serde::{Deserialize, Serialize};
use tower_cookies::cookie::time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

use super::json_body;
use crate::error::{AppError, AppResult};
use crate::middleware::admin_session::AdminSession;
use crate::query::ListingParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, alias = "pwd")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub granted: bool,
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/login
///
/// Compare the submitted password with the admin secret and, on a match,
/// set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let input = json_body(payload)?;
    let password = input
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("missing password".into()))?;

    let Some(session) = state.admin_gate.issue_session(&password) else {
        tracing::warn!("Admin login denied");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    };

    cookies.add(session_cookie(session));
    tracing::info!("Admin login granted");

    Ok(Json(DataResponse {
        data: LoginResponse { granted: true },
    }))
}

/// Translate the gate's cookie description into a `tower-cookies` cookie.
///
/// `tower-cookies` writes values verbatim and percent-decodes them on read,
/// so the value is encoded here.
fn session_cookie(session: SessionCookie) -> Cookie<'static> {
    let value = percent_encode_value(&session.value);
    let mut cookie = Cookie::new(session.name, value);
    cookie.set_path(session.path);
    cookie.set_http_only(session.http_only);
    if session.same_site_lax {
        cookie.set_same_site(SameSite::Lax);
    }
    cookie.set_max_age(Duration::seconds(session.max_age_secs));
    cookie.set_secure(session.secure);
    cookie
}

/// Cookie-safe percent-encoding of a value, using the `cookie` crate's
/// encode set.
fn percent_encode_value(value: &str) -> String {
    let pair = Cookie::new("v", value).encoded().stripped().to_string();
    pair.split_once('=')
        .map(|(_, encoded)| encoded.to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/leads?page=&q=
///
/// One page of leads, newest first, optionally filtered by `q` over the rows
/// of that page only.
pub async fn list_leads(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Json<DataResponse<LeadPage>> {
    Json(DataResponse {
        data: load_page(&state.pool, &params).await,
    })
}

/// GET /api/v1/admin/leads/export?page=&q=
///
/// The rows `list_leads` would return for the same parameters, as CSV.
pub async fn export_leads(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    let page = load_page(&state.pool, &params).await;
    let body = csv_export::encode(&LEAD_EXPORT_HEADERS, page.items.iter().map(lead_csv_row));
    let filename = csv_export::export_filename(Utc::now().date_naive());

    tracing::info!(rows = page.items.len(), page = page.page, "Exported leads CSV");

    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
}

/// Fetch and filter one listing page. Store failures degrade to an empty
/// first page rather than failing the request.
async fn load_page(pool: &DbPool, params: &ListingParams) -> LeadPage {
    let window = PageWindow::new(parse_page(params.page.as_deref()), ADMIN_PAGE_SIZE);
    let query = normalize_query(params.q.as_deref());

    match fetch_window(pool, window).await {
        Ok((total, rows)) => LeadPage {
            items: filter_page(rows, query.as_deref()),
            total,
            page: window.page,
            page_size: window.limit,
            total_pages: total_pages(total, window.limit),
            query,
        },
        Err(e) => {
            tracing::error!(
                error = %e,
                page = window.page,
                "Failed to load leads; showing empty listing",
            );
            LeadPage {
                items: Vec::new(),
                total: 0,
                page: 1,
                page_size: window.limit,
                total_pages: 1,
                query,
            }
        }
    }
}

async fn fetch_window(
    pool: &DbPool,
    window: PageWindow,
) -> Result<(i64, Vec<Lead>), sqlx::Error> {
    let total = LeadRepo::count_all(pool).await?;
    if window.rows_available(total) == 0 {
        return Ok((total, Vec::new()));
    }
    let rows = LeadRepo::list_page(pool, window.limit, window.offset).await?;
    Ok((total, rows))
}

/// One export row, in [`LEAD_EXPORT_HEADERS`] order.
fn lead_csv_row(lead: &Lead) -> Vec<String> {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    vec![
        lead.created_at.to_rfc3339(),
        lead.client_name.clone(),
        csv_export::guard_phone(lead.phone.as_deref()),
        text(&lead.email),
        lead.area.map(|a| a.to_string()).unwrap_or_default(),
        text(&lead.category),
        text(&lead.source),
        text(&lead.budget_range),
        csv_export::flag_cell(lead.add_carpentry).to_string(),
        csv_export::flag_cell(lead.add_system_furniture).to_string(),
        csv_export::flag_cell(lead.add_electrical).to_string(),
        csv_export::flag_cell(lead.add_painting).to_string(),
        csv_export::flag_cell(lead.add_flooring).to_string(),
        lead.quote_estimate.to_string(),
        csv_export::flatten_lines(lead.notes.as_deref().unwrap_or_default()),
    ]
}
