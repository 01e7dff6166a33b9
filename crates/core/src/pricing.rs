//! Quote pricing engine.
//!
//! A lead's estimate is a flat base price plus a per-unit-area rate, plus one
//! per-unit-area surcharge for every selected add-on. The same [`estimate`]
//! function backs both the live preview endpoint and the authoritative
//! computation performed before a lead is stored.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Default rates
// ---------------------------------------------------------------------------

/// Flat base price applied to every quote.
pub const DEFAULT_BASE_PRICE: f64 = 80_000.0;
/// Price per unit of floor area.
pub const DEFAULT_PRICE_PER_UNIT: f64 = 20_000.0;
/// Carpentry surcharge per unit of floor area.
pub const DEFAULT_CARPENTRY_PER_UNIT: f64 = 6_000.0;
/// System furniture surcharge per unit of floor area.
pub const DEFAULT_SYSTEM_FURNITURE_PER_UNIT: f64 = 8_000.0;
/// Electrical surcharge per unit of floor area.
pub const DEFAULT_ELECTRICAL_PER_UNIT: f64 = 3_000.0;
/// Painting surcharge per unit of floor area.
pub const DEFAULT_PAINTING_PER_UNIT: f64 = 1_500.0;
/// Flooring surcharge per unit of floor area.
pub const DEFAULT_FLOORING_PER_UNIT: f64 = 3_500.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The seven pricing constants. Built from defaults, optionally overridden
/// from configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base_price: f64,
    pub price_per_unit: f64,
    pub carpentry_per_unit: f64,
    pub system_furniture_per_unit: f64,
    pub electrical_per_unit: f64,
    pub painting_per_unit: f64,
    pub flooring_per_unit: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            price_per_unit: DEFAULT_PRICE_PER_UNIT,
            carpentry_per_unit: DEFAULT_CARPENTRY_PER_UNIT,
            system_furniture_per_unit: DEFAULT_SYSTEM_FURNITURE_PER_UNIT,
            electrical_per_unit: DEFAULT_ELECTRICAL_PER_UNIT,
            painting_per_unit: DEFAULT_PAINTING_PER_UNIT,
            flooring_per_unit: DEFAULT_FLOORING_PER_UNIT,
        }
    }
}

/// The five independent add-on selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnFlags {
    pub carpentry: bool,
    pub system_furniture: bool,
    pub electrical: bool,
    pub painting: bool,
    pub flooring: bool,
}

impl AddOnFlags {
    /// Pair each flag with its surcharge from `rates`.
    fn surcharges(&self, rates: &RateTable) -> [(bool, f64); 5] {
        [
            (self.carpentry, rates.carpentry_per_unit),
            (self.system_furniture, rates.system_furniture_per_unit),
            (self.electrical, rates.electrical_per_unit),
            (self.painting, rates.painting_per_unit),
            (self.flooring, rates.flooring_per_unit),
        ]
    }
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Clamp an area to something the formula can use.
///
/// Absent, negative, NaN and infinite values all become `0.0`.
pub fn billable_area(area: Option<f64>) -> f64 {
    match area {
        Some(a) if a.is_finite() && a > 0.0 => a,
        _ => 0.0,
    }
}

/// Compute the quote for `area` with the selected add-ons.
///
/// `round(base + area * per_unit + sum(area * surcharge for enabled add-ons))`,
/// rounding halves upward. Never fails: unusable areas price as zero area.
pub fn estimate(area: Option<f64>, flags: &AddOnFlags, rates: &RateTable) -> i64 {
    let area = billable_area(area);

    let mut total = rates.base_price + area * rates.price_per_unit;
    for (enabled, rate) in flags.surcharges(rates) {
        if enabled {
            total += area * rate;
        }
    }

    // Half-up rounding; `as` saturates on absurdly large areas.
    (total + 0.5).floor() as i64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
