//! Lead submission normalization.
//!
//! Intake bodies arrive loosely typed (numbers as strings, checkboxes as
//! `"on"`, phones as numbers). [`normalize`] turns a [`LeadSubmission`] into a
//! canonical [`NewLead`]; [`NewLead::price`] then attaches the server-side
//! estimate, producing the only shape the store accepts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::pricing::{self, AddOnFlags, RateTable};

// ---------------------------------------------------------------------------
// Field limits (characters)
// ---------------------------------------------------------------------------

pub const MAX_CLIENT_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 50;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_CATEGORY_LEN: usize = 50;
pub const MAX_SOURCE_LEN: usize = 50;
pub const MAX_BUDGET_RANGE_LEN: usize = 50;
pub const MAX_NOTES_LEN: usize = 2000;

/// String values that coerce to `false` (compared case-insensitively).
const FALSY_STRINGS: &[&str] = &["", "0", "false", "off", "no"];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A raw intake body. Every field is optional and untyped; unknown fields,
/// including any client-computed estimate, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadSubmission {
    pub client_name: Option<Value>,
    pub phone: Option<Value>,
    pub email: Option<Value>,
    #[serde(alias = "area_ping")]
    pub area: Option<Value>,
    pub category: Option<Value>,
    pub source: Option<Value>,
    pub notes: Option<Value>,
    pub budget_range: Option<Value>,
    pub add_carpentry: Option<Value>,
    pub add_system_furniture: Option<Value>,
    pub add_electrical: Option<Value>,
    pub add_painting: Option<Value>,
    pub add_flooring: Option<Value>,
}

impl LeadSubmission {
    /// The submitted area as a usable number, or `None` when absent, empty or
    /// unparsable. Negative values clamp to zero.
    pub fn area(&self) -> Option<f64> {
        coerce_area(self.area.as_ref())
    }

    /// The five add-on selections as strict booleans.
    pub fn add_ons(&self) -> AddOnFlags {
        AddOnFlags {
            carpentry: coerce_bool(self.add_carpentry.as_ref()),
            system_furniture: coerce_bool(self.add_system_furniture.as_ref()),
            electrical: coerce_bool(self.add_electrical.as_ref()),
            painting: coerce_bool(self.add_painting.as_ref()),
            flooring: coerce_bool(self.add_flooring.as_ref()),
        }
    }

    /// Preview price for this submission. Name is not required.
    pub fn estimate(&self, rates: &RateTable) -> i64 {
        pricing::estimate(self.area(), &self.add_ons(), rates)
    }
}

/// A validated, length-capped lead ready for pricing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLead {
    pub client_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub area: Option<f64>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub budget_range: Option<String>,
    pub add_ons: AddOnFlags,
}

impl NewLead {
    /// Compute the authoritative estimate from this lead's own area and
    /// add-ons.
    pub fn price(self, rates: &RateTable) -> PricedLead {
        let estimate = pricing::estimate(self.area, &self.add_ons, rates);
        PricedLead {
            lead: self,
            estimate,
        }
    }
}

/// A normalized lead together with its server-computed estimate.
///
/// Only constructible through [`NewLead::price`], so a stored estimate can
/// never come from anywhere but the pricing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLead {
    lead: NewLead,
    estimate: i64,
}

impl PricedLead {
    pub fn lead(&self) -> &NewLead {
        &self.lead
    }

    pub fn estimate(&self) -> i64 {
        self.estimate
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a raw submission.
///
/// Fails with [`CoreError::Validation`] when `client_name` is missing or blank.
pub fn normalize(raw: &LeadSubmission) -> Result<NewLead, CoreError> {
    let client_name = capped_text(raw.client_name.as_ref(), MAX_CLIENT_NAME_LEN)
        .ok_or_else(|| CoreError::Validation("client_name is required".into()))?;

    Ok(NewLead {
        client_name,
        phone: capped_text(raw.phone.as_ref(), MAX_PHONE_LEN),
        email: capped_text(raw.email.as_ref(), MAX_EMAIL_LEN),
        area: raw.area(),
        category: capped_text(raw.category.as_ref(), MAX_CATEGORY_LEN),
        source: capped_text(raw.source.as_ref(), MAX_SOURCE_LEN),
        notes: capped_text(raw.notes.as_ref(), MAX_NOTES_LEN),
        budget_range: capped_text(raw.budget_range.as_ref(), MAX_BUDGET_RANGE_LEN),
        add_ons: raw.add_ons(),
    })
}

/// Stringify, trim and cap a value. Blank results become `None`.
pub fn capped_text(value: Option<&Value>, max_chars: usize) -> Option<String> {
    let text = match value? {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    if text.is_empty() {
        return None;
    }
    Some(truncate_chars(&text, max_chars))
}

/// Truncate to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Coerce any JSON value to a strict boolean.
pub fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => {
            let s = s.trim().to_ascii_lowercase();
            !FALSY_STRINGS.contains(&s.as_str())
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Coerce an area value. Absent, blank, non-numeric and non-finite inputs are
/// `None`; booleans count as `1.0`/`0.0`; negatives clamp to `0.0`.
pub fn coerce_area(value: Option<&Value>) -> Option<f64> {
    let area = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    if !area.is_finite() {
        return None;
    }
    Some(if area <= 0.0 { 0.0 } else { area })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
