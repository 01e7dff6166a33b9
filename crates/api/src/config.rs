use leaddesk_core::pricing::RateTable;

/// Deployment environment, controlling the session cookie `Secure` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse an `APP_ENV` value. Anything other than `production`/`prod`
    /// (case-insensitive) is development.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Server configuration loaded once from environment variables.
///
/// All fields have sensible defaults suitable for local development, except
/// the admin secret which is simply absent (admin access disabled).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Lead store pool size (default: `10`).
    pub database_max_connections: u32,
    pub environment: Environment,
    /// Shared admin secret. `None` disables the admin pages.
    pub admin_secret: Option<String>,
    /// Active pricing rates.
    pub rates: RateTable,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                           | Default                 |
    /// |-----------------------------------|-------------------------|
    /// | `HOST`                            | `0.0.0.0`               |
    /// | `PORT`                            | `3000`                  |
    /// | `CORS_ORIGINS`                    | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`            | `30`                    |
    /// | `DATABASE_MAX_CONNECTIONS`        | `10`                    |
    /// | `APP_ENV`                         | `development`           |
    /// | `ADMIN_SECRET`                    | unset                   |
    /// | `QUOTE_BASE_PRICE`                | `80000`                 |
    /// | `QUOTE_PRICE_PER_UNIT`            | `20000`                 |
    /// | `QUOTE_CARPENTRY_PER_UNIT`        | `6000`                  |
    /// | `QUOTE_SYSTEM_FURNITURE_PER_UNIT` | `8000`                  |
    /// | `QUOTE_ELECTRICAL_PER_UNIT`       | `3000`                  |
    /// | `QUOTE_PAINTING_PER_UNIT`         | `1500`                  |
    /// | `QUOTE_FLOORING_PER_UNIT`         | `3500`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let environment = std::env::var("APP_ENV")
            .map(|v| Environment::from_name(&v))
            .unwrap_or(Environment::Development);

        let admin_secret = std::env::var("ADMIN_SECRET").ok().filter(|s| !s.is_empty());
        if admin_secret.is_none() {
            tracing::warn!("ADMIN_SECRET is not set; admin pages are disabled");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_max_connections,
            environment,
            admin_secret,
            rates: rates_from_env(),
        }
    }

    /// Session cookies carry `Secure` only in production.
    pub fn secure_cookies(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// Build the rate table from `QUOTE_*` overrides.
fn rates_from_env() -> RateTable {
    let defaults = RateTable::default();
    let rate = |var: &str, default: f64| match std::env::var(var) {
        Ok(raw) => parse_rate_override(&raw).unwrap_or_else(|| {
            tracing::warn!(var, value = %raw, default, "Ignoring invalid rate override");
            default
        }),
        Err(_) => default,
    };

    RateTable {
        base_price: rate("QUOTE_BASE_PRICE", defaults.base_price),
        price_per_unit: rate("QUOTE_PRICE_PER_UNIT", defaults.price_per_unit),
        carpentry_per_unit: rate("QUOTE_CARPENTRY_PER_UNIT", defaults.carpentry_per_unit),
        system_furniture_per_unit: rate(
            "QUOTE_SYSTEM_FURNITURE_PER_UNIT",
            defaults.system_furniture_per_unit,
        ),
        electrical_per_unit: rate("QUOTE_ELECTRICAL_PER_UNIT", defaults.electrical_per_unit),
        painting_per_unit: rate("QUOTE_PAINTING_PER_UNIT", defaults.painting_per_unit),
        flooring_per_unit: rate("QUOTE_FLOORING_PER_UNIT", defaults.flooring_per_unit),
    }
}

/// Parse one rate override. Only finite values greater than zero are
/// accepted, so a blank, zero or garbage override never zeroes a rate.
pub fn parse_rate_override(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
