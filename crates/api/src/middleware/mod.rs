//! Request extractors that guard routes.
//!
//! - [`admin_session::AdminSession`] -- Requires a valid admin session cookie.

pub mod admin_session;
