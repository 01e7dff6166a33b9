use std::sync::Arc;

use leaddesk_core::admin_gate::AdminGate;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Lead store connection pool.
    pub pool: leaddesk_db::DbPool,
    /// Server configuration, including the active rate table.
    pub config: Arc<ServerConfig>,
    /// Admin gate built once from the configured secret.
    pub admin_gate: Arc<AdminGate>,
}

impl AppState {
    pub fn new(pool: leaddesk_db::DbPool, config: ServerConfig) -> Self {
        let admin_gate = AdminGate::new(config.admin_secret.clone(), config.secure_cookies());
        Self {
            pool,
            config: Arc::new(config),
            admin_gate: Arc::new(admin_gate),
        }
    }
}
