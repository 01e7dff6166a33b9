//! Substring search over an already-fetched listing page.
//!
//! Matching is case-insensitive and limited to the rows in hand; it is not a
//! database-wide search.

/// Rows that can be matched against a listing search.
pub trait Searchable {
    /// Name, phone, email, category and source, in that order.
    fn search_fields(&self) -> [Option<&str>; 5];
}

/// Trim and lowercase a search query. Blank queries are `None`.
pub fn normalize_query(query: Option<&str>) -> Option<String> {
    let q = query?.trim().to_lowercase();
    (!q.is_empty()).then_some(q)
}

/// Whether any searchable field of `row` contains `needle`.
///
/// `needle` must already be normalized with [`normalize_query`].
pub fn matches<T: Searchable>(row: &T, needle: &str) -> bool {
    row.search_fields()
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep only the rows matching `query`; a blank query keeps everything.
pub fn filter_page<T: Searchable>(rows: Vec<T>, query: Option<&str>) -> Vec<T> {
    match normalize_query(query) {
        Some(needle) => rows.into_iter().filter(|r| matches(r, &needle)).collect(),
        None => rows,
    }
}
