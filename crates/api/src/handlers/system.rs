//! Service-level endpoints: liveness and configuration presence.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    /// The process is up but the lead store did not answer.
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Always 200 while the process serves requests; store reachability is
/// reported in the body.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = store_reachable(&state).await;

    Json(HealthReport {
        status: if db_healthy {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

async fn store_reachable(state: &AppState) -> bool {
    match leaddesk_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Lead store ping failed");
            false
        }
    }
}

/// Configuration presence report. Never includes secret values.
#[derive(Debug, Serialize)]
pub struct EnvCheck {
    pub has_admin_secret: bool,
    pub environment: &'static str,
    pub secure_cookies: bool,
    /// Whether the configured lead store answers a ping.
    pub store_reachable: bool,
}

/// GET /api/v1/env-check
pub async fn env_check(State(state): State<AppState>) -> Json<DataResponse<EnvCheck>> {
    Json(DataResponse {
        data: EnvCheck {
            has_admin_secret: state.admin_gate.is_configured(),
            environment: state.config.environment.as_str(),
            secure_cookies: state.config.secure_cookies(),
            store_reachable: store_reachable(&state).await,
        },
    })
}
