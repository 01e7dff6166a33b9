//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the admin listing and its CSV export
/// (`?page=&q=`).
///
/// `page` is kept as raw text so that garbage falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub page: Option<String>,
    pub q: Option<String>,
}
