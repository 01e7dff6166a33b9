//! Spreadsheet-friendly CSV encoding for lead exports.
//!
//! Output starts with a UTF-8 byte-order mark so spreadsheet tools detect the
//! encoding, and every cell is quoted with embedded quotes doubled.

use chrono::NaiveDate;

/// UTF-8 byte-order mark prepended to every export.
pub const UTF8_BOM: char = '\u{FEFF}';

/// Column titles for the lead export, in output order.
pub const LEAD_EXPORT_HEADERS: [&str; 15] = [
    "Created At",
    "Client Name",
    "Phone",
    "Email",
    "Area",
    "Category",
    "Source",
    "Budget Range",
    "Carpentry",
    "System Furniture",
    "Electrical",
    "Painting",
    "Flooring",
    "Estimate",
    "Notes",
];

/// Quote one cell, doubling any embedded quotes.
pub fn escape_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Prefix a phone number with a tab so spreadsheets keep it as text instead
/// of reformatting it as a number.
pub fn guard_phone(phone: Option<&str>) -> String {
    match phone {
        Some(p) if !p.is_empty() => format!("\t{p}"),
        _ => String::new(),
    }
}

/// Replace line breaks with spaces so a cell stays on one line.
pub fn flatten_lines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// `"1"` for a set flag, empty otherwise.
pub fn flag_cell(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        ""
    }
}

/// Encode a header row plus data rows, BOM first, rows joined by `\n`.
pub fn encode<I>(headers: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut out = String::new();
    out.push(UTF8_BOM);
    out.push_str(&encode_row(headers.iter().copied()));
    for row in rows {
        out.push('\n');
        out.push_str(&encode_row(row.iter().map(String::as_str)));
    }
    out
}

fn encode_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.map(escape_cell).collect::<Vec<_>>().join(",")
}

/// Download filename for an export taken on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("leads_{}.csv", date.format("%Y-%m-%d"))
}
