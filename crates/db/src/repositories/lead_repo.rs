//! Repository for the `leads` table.
//!
//! Leads are append-only: there is no update or delete.

use leaddesk_core::lead::PricedLead;
use sqlx::PgPool;

use crate::models::lead::Lead;

/// Column list for `leads` queries.
const COLUMNS: &str = "\
    id, created_at, client_name, phone, email, area, category, source, \
    notes, budget_range, add_carpentry, add_system_furniture, \
    add_electrical, add_painting, add_flooring, quote_estimate";

/// Insert and read operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a priced lead, returning the stored row with its id and
    /// creation timestamp.
    pub async fn create(pool: &PgPool, input: &PricedLead) -> Result<Lead, sqlx::Error> {
        let lead = input.lead();
        let query = format!(
            "INSERT INTO leads \
                (client_name, phone, email, area, category, source, notes, \
                 budget_range, add_carpentry, add_system_furniture, \
                 add_electrical, add_painting, add_flooring, quote_estimate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&lead.client_name)
            .bind(&lead.phone)
            .bind(&lead.email)
            .bind(lead.area)
            .bind(&lead.category)
            .bind(&lead.source)
            .bind(&lead.notes)
            .bind(&lead.budget_range)
            .bind(lead.add_ons.carpentry)
            .bind(lead.add_ons.system_furniture)
            .bind(lead.add_ons.electrical)
            .bind(lead.add_ons.painting)
            .bind(lead.add_ons.flooring)
            .bind(input.estimate())
            .fetch_one(pool)
            .await
    }

    /// Total number of stored leads.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM leads")
            .fetch_one(pool)
            .await
    }

    /// One page of leads, newest first. Offsets past the end yield an empty
    /// list.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
