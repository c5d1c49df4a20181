//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `EBLEN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `EBLEN_HOST` - Bind address (default: 127.0.0.1)
//! - `EBLEN_PORT` - Listen port (default: 3000)
//! - `EBLEN_STORAGE_URL` - Object storage project URL (hero renders a placeholder without it)
//! - `EBLEN_STORAGE_BUCKET` - Public bucket holding site assets (default: eblen-site-assets)
//! - `EBLEN_HERO_IMAGE_KEY` - Object key of the hero image (default: utp-photo.png)
//! - `EBLEN_CACHE_TTL_SECS` - Product/review list cache lifetime (default: 60)
//! - `EBLEN_STATIC_DIR` - Directory served under `/static` (default: crates/storefront/static)
//! - `EBLEN_TRUST_PROXY_HEADERS` - Key the review rate limit on proxy headers
//!   instead of the socket peer; only set behind a proxy that overwrites them (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default public bucket for site assets.
pub const DEFAULT_STORAGE_BUCKET: &str = "eblen-site-assets";

/// Default object key of the hero photo.
pub const DEFAULT_HERO_IMAGE_KEY: &str = "utp-photo.png";

/// Default static asset directory, relative to the workspace root.
pub const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Object storage settings for images
    pub storage: StorageConfig,
    /// How long product and review lists stay cached
    pub cache_ttl: Duration,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Whether client IPs may be read from proxy headers
    pub trust_proxy_headers: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

/// Object storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage project base URL, e.g. `https://abc.supabase.co`
    pub base_url: Option<Url>,
    /// Public bucket name
    pub bucket: String,
    /// Object key of the hero image
    pub hero_image_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            bucket: DEFAULT_STORAGE_BUCKET.to_string(),
            hero_image_key: DEFAULT_HERO_IMAGE_KEY.to_string(),
        }
    }
}

impl StorefrontConfig {
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

        let database_url = get_database_url("EBLEN_DATABASE_URL")?;
        let host = get_env_or_default("EBLEN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("EBLEN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("EBLEN_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("EBLEN_PORT".to_string(), e.to_string()))?;
        let cache_ttl = get_env_or_default("EBLEN_CACHE_TTL_SECS", "60")
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| {
                ConfigError::InvalidEnvVar("EBLEN_CACHE_TTL_SECS".to_string(), e.to_string())
            })?;

        let trust_proxy_headers = parse_bool(
            "EBLEN_TRUST_PROXY_HEADERS",
            &get_env_or_default("EBLEN_TRUST_PROXY_HEADERS", "false"),
        )?;

        let storage = StorageConfig::from_env()?;

        Ok(Self {
            database_url,
            host,
            port,
            storage,
            cache_ttl,
            static_dir: PathBuf::from(get_env_or_default("EBLEN_STATIC_DIR", DEFAULT_STATIC_DIR)),
            trust_proxy_headers,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_optional_env("EBLEN_STORAGE_URL")
            .map(|raw| parse_storage_url("EBLEN_STORAGE_URL", &raw))
            .transpose()?;

        Ok(Self {
            base_url,
            bucket: get_env_or_default("EBLEN_STORAGE_BUCKET", DEFAULT_STORAGE_BUCKET),
            hero_image_key: get_env_or_default("EBLEN_HERO_IMAGE_KEY", DEFAULT_HERO_IMAGE_KEY),
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
    get_required_env("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional, non-blank environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse a boolean flag (`true`/`false`, `1`/`0`, `yes`/`no`).
fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

/// Parse an absolute `http(s)` storage URL.
fn parse_storage_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "URL must have a host".to_string(),
        ));
    }

    Ok(url)
}
