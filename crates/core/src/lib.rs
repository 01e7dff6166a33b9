//! Domain logic for the lead-intake service.
//!
//! Everything in this crate is pure: no I/O, no environment access. The
//! persistence and HTTP crates call into it so that pricing, normalization
//! and the admin gate have exactly one implementation.

pub mod admin_gate;
pub mod csv_export;
pub mod error;
pub mod lead;
pub mod pagination;
pub mod pricing;
pub mod search;
pub mod types;
