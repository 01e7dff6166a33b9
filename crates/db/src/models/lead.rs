//! Lead entity model.

use leaddesk_core::search::Searchable;
use leaddesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub created_at: Timestamp,
    pub client_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub area: Option<f64>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub budget_range: Option<String>,
    pub add_carpentry: bool,
    pub add_system_furniture: bool,
    pub add_electrical: bool,
    pub add_painting: bool,
    pub add_flooring: bool,
    pub quote_estimate: i64,
}

impl Searchable for Lead {
    fn search_fields(&self) -> [Option<&str>; 5] {
        [
            Some(self.client_name.as_str()),
            self.phone.as_deref(),
            self.email.as_deref(),
            self.category.as_deref(),
            self.source.as_deref(),
        ]
    }
}

/// One page of the admin listing.
#[derive(Debug, Serialize)]
pub struct LeadPage {
    pub items: Vec<Lead>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    /// The search text applied to `items`, if any.
    pub query: Option<String>,
}
