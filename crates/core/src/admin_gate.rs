//! Shared-secret admin gate.
//!
//! The listing pages are protected by a single configured secret. A correct
//! login issues a session cookie whose value is the secret itself; every
//! admin request re-compares that cookie against the configuration. There is
//! no per-user identity, lockout or revocation.

use serde::Serialize;

/// Name of the session cookie issued on a successful login.
pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// Session cookie lifetime: seven days.
pub const SESSION_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// Where unauthenticated admin requests are sent.
pub const PUBLIC_ENTRY_POINT: &str = "/?need_admin=1";

/// Outcome of a secret or cookie comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    Granted,
    Denied,
}

impl GateDecision {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// Attributes for the issued session cookie. Transport-agnostic; the HTTP
/// layer turns this into a `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: &'static str,
    /// Raw secret; the transport encodes it for the header.
    pub value: String,
    pub path: &'static str,
    pub http_only: bool,
    pub same_site_lax: bool,
    pub max_age_secs: i64,
    pub secure: bool,
}

/// The gate itself, built once from configuration.
#[derive(Debug, Clone)]
pub struct AdminGate {
    secret: Option<String>,
    secure_cookies: bool,
}

impl AdminGate {
    /// `secret` of `None` (or blank) disables admin access entirely.
    pub fn new(secret: Option<String>, secure_cookies: bool) -> Self {
        let secret = secret.filter(|s| !s.is_empty());
        Self {
            secret,
            secure_cookies,
        }
    }

    /// Whether a secret is configured at all.
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Compare a submitted secret against the configured one.
    pub fn authenticate(&self, submitted: &str) -> GateDecision {
        match &self.secret {
            Some(secret) if secret == submitted => GateDecision::Granted,
            _ => GateDecision::Denied,
        }
    }

    /// Re-check a session cookie value on an admin request. An absent cookie
    /// is always denied, even when no secret is configured.
    pub fn verify_session(&self, cookie_value: Option<&str>) -> GateDecision {
        match cookie_value {
            Some(value) => self.authenticate(value),
            None => GateDecision::Denied,
        }
    }

    /// Build the session cookie for a granted login.
    ///
    /// Returns `None` unless `submitted` actually matches the secret.
    pub fn issue_session(&self, submitted: &str) -> Option<SessionCookie> {
        if !self.authenticate(submitted).is_granted() {
            return None;
        }
        Some(SessionCookie {
            name: SESSION_COOKIE_NAME,
            value: submitted.to_string(),
            path: "/",
            http_only: true,
            same_site_lax: true,
            max_age_secs: SESSION_MAX_AGE_SECS,
            secure: self.secure_cookies,
        })
    }
}
