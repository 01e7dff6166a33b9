//! Handlers for the public intake endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use leaddesk_core::lead::{normalize, LeadSubmission};
use leaddesk_core::types::{DbId, Timestamp};
use leaddesk_db::repositories::LeadRepo;
use serde::Serialize;

use super::json_body;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body returned after a lead is stored.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: DbId,
    pub created_at: Timestamp,
    /// Server-computed estimate; any client-sent value is discarded.
    pub estimate: i64,
}

/// POST /api/v1/leads
///
/// Normalize the submission, price it with the configured rates and store it.
pub async fn submit_lead(
    State(state): State<AppState>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let raw = json_body(payload)?;

    let priced = normalize(&raw)?.price(&state.config.rates);
    let lead = LeadRepo::create(&state.pool, &priced).await?;

    tracing::info!(
        lead_id = lead.id,
        estimate = lead.quote_estimate,
        "Lead submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmitResponse {
                id: lead.id,
                created_at: lead.created_at,
                estimate: lead.quote_estimate,
            },
        }),
    ))
}
