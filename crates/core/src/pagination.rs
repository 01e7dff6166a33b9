//! Page math for the admin listing.

/// Rows per admin listing page.
pub const ADMIN_PAGE_SIZE: i64 = 20;

/// A resolved page request: which rows to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number.
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let limit = page_size.max(1);
        Self {
            page,
            limit,
            offset: (page - 1).saturating_mul(limit),
        }
    }

    /// How many rows this window holds out of `total`.
    pub fn rows_available(&self, total: i64) -> i64 {
        (total - self.offset).clamp(0, self.limit)
    }
}

/// Parse a `?page=` value. Missing, unparsable and non-positive values all
/// resolve to the first page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Number of pages needed for `total` rows. Never less than one, so an empty
/// listing still renders "page 1 of 1".
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    let page_size = page_size.max(1);
    let total = total.max(0);
    ((total + page_size - 1) / page_size).max(1)
}
