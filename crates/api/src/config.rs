//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SAFECART_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//! - `SAFECART_CLIENT_ORIGIN` - Origin of the browser client, for CORS
//! - `SAFECART_AUTH_ISSUER` - Identity provider issuer URL
//!   (e.g., <https://your-tenant.auth0.com/>)
//! - `SAFECART_AUTH_AUDIENCE` - Expected audience of bearer credentials
//!
//! ## Optional
//! - `SAFECART_HOST` - Bind address (default: 127.0.0.1)
//! - `SAFECART_PORT` - Listen port (default: 5000)
//! - `SAFECART_MAX_QUANTITY` - Upper quantity bound per order (default: 100)
//! - `SAFECART_MAX_MESSAGE_CHARS` - Message length bound (default: 500)
//! - `SAFECART_NON_DELIVERY_DAY` - Weekday with no deliveries
//!   (default: sunday)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use chrono::Weekday;
use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origin of the browser client, allowed by CORS
    pub client_origin: String,
    /// Identity provider configuration
    pub auth: AuthConfig,
    /// Order submission business bounds
    pub policy: OrderPolicy,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// External identity provider configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Issuer URL, normalized to end with a slash. Must match the `iss`
    /// claim of presented credentials exactly.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
}

impl AuthConfig {
    /// The issuer's JWKS document location.
    #[must_use]
    pub fn jwks_url(&self) -> String {
        format!("{}.well-known/jwks.json", self.issuer)
    }
}

/// Business bounds applied to order submissions.
///
/// These are arbitrary business constants with no intrinsic rationale, so
/// they live in configuration rather than as literals in the validator.
#[derive(Debug, Clone)]
pub struct OrderPolicy {
    /// Smallest accepted quantity (inclusive).
    pub min_quantity: i64,
    /// Largest accepted quantity (inclusive).
    pub max_quantity: i64,
    /// Delivery location length bounds after trimming (inclusive).
    pub location_len: (usize, usize),
    /// Product name length bounds after trimming (inclusive).
    pub product_len: (usize, usize),
    /// Longest accepted message after trimming (inclusive).
    pub max_message_chars: usize,
    /// Weekday on which no deliveries happen.
    pub non_delivery_day: Weekday,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            min_quantity: 1,
            max_quantity: 100,
            location_len: (2, 50),
            product_len: (2, 100),
            max_message_chars: 500,
            non_delivery_day: Weekday::Sun,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("SAFECART_DATABASE_URL")?;
        let host = get_env_or_default("SAFECART_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SAFECART_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SAFECART_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SAFECART_PORT".to_string(), e.to_string()))?;
        let client_origin = get_required_env("SAFECART_CLIENT_ORIGIN")?;
        url::Url::parse(&client_origin).map_err(|e| {
            ConfigError::InvalidEnvVar("SAFECART_CLIENT_ORIGIN".to_string(), e.to_string())
        })?;

        let auth = AuthConfig::from_env()?;
        let policy = OrderPolicy::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            host,
            port,
            client_origin,
            auth,
            policy,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_issuer = get_required_env("SAFECART_AUTH_ISSUER")?;
        let audience = get_required_env("SAFECART_AUTH_AUDIENCE")?;
        Ok(Self {
            issuer: normalize_issuer(&raw_issuer),
            audience,
        })
    }
}

impl OrderPolicy {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let max_quantity = get_parsed_or("SAFECART_MAX_QUANTITY", defaults.max_quantity)?;
        let max_message_chars =
            get_parsed_or("SAFECART_MAX_MESSAGE_CHARS", defaults.max_message_chars)?;
        let non_delivery_day = match get_optional_env("SAFECART_NON_DELIVERY_DAY") {
            Some(raw) => raw.parse::<Weekday>().map_err(|_| {
                ConfigError::InvalidEnvVar("SAFECART_NON_DELIVERY_DAY".to_string(), raw)
            })?,
            None => defaults.non_delivery_day,
        };

        Ok(Self {
            max_quantity,
            max_message_chars,
            non_delivery_day,
            ..defaults
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an optional environment variable, falling back to a default.
fn get_parsed_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match get_optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar(key.to_string(), raw)),
        None => Ok(default),
    }
}

/// Ensure the issuer URL ends with a slash, as the `iss` claim does.
fn normalize_issuer(raw: &str) -> String {
    if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    }
}
