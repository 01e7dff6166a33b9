//! Handlers exposing the pricing engine to the intake form.
//!
//! The live preview goes through the same function the intake endpoint uses,
//! so the number shown while typing is the number that gets stored.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use leaddesk_core::lead::LeadSubmission;
use leaddesk_core::pricing::RateTable;
use serde::Serialize;

use super::json_body;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EstimatePreview {
    pub estimate: i64,
    /// The area actually priced, after coercion.
    pub area: Option<f64>,
}

/// GET /api/v1/pricing/rates
pub async fn get_rates(State(state): State<AppState>) -> Json<DataResponse<RateTable>> {
    Json(DataResponse {
        data: state.config.rates,
    })
}

/// POST /api/v1/pricing/estimate
///
/// Accepts the intake body shape; `client_name` is not required.
pub async fn preview_estimate(
    State(state): State<AppState>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> AppResult<Json<DataResponse<EstimatePreview>>> {
    let raw = json_body(payload)?;

    Ok(Json(DataResponse {
        data: EstimatePreview {
            estimate: raw.estimate(&state.config.rates),
            area: raw.area(),
        },
    }))
}
