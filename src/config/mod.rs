//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the binary runs out of the box. Numeric values are validated at load
//! time and produce a `ConfigError` instead of panicking later.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests refer to
/// them without retyping the strings.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_UPSTREAM_BASE_URL: &str = "UPSTREAM_BASE_URL";
pub const ENV_CACHE_BACKEND: &str = "CACHE_BACKEND";
pub const ENV_CACHE_TTL_SECS: &str = "CACHE_TTL_SECS";
pub const ENV_RATE_LIMIT_MAX_REQUESTS: &str = "RATE_LIMIT_MAX_REQUESTS";
pub const ENV_RATE_LIMIT_WINDOW_SECS: &str = "RATE_LIMIT_WINDOW_SECS";
pub const ENV_DEMO_USER_EMAILS: &str = "DEMO_USER_EMAILS";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://theprint.in/";
const DEFAULT_CACHE_BACKEND: &str = "memory";
const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: i64 = 900;
const DEFAULT_DEMO_USER_EMAILS: &str = "demo@newswire.dev";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    upstream_base_url: String,
    cache_backend: String,
    cache_ttl_secs: u64,
    rate_limit_max_requests: u32,
    rate_limit_window_secs: i64,
    demo_user_emails: Vec<String>,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let upstream_base_url = env::var(ENV_UPSTREAM_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let cache_backend =
            env::var(ENV_CACHE_BACKEND).unwrap_or_else(|_| DEFAULT_CACHE_BACKEND.to_string());
        let cache_ttl_secs = parse_env(ENV_CACHE_TTL_SECS, DEFAULT_CACHE_TTL_SECS)?;
        let rate_limit_max_requests =
            parse_env(ENV_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_MAX_REQUESTS)?;
        let rate_limit_window_secs =
            parse_env(ENV_RATE_LIMIT_WINDOW_SECS, DEFAULT_RATE_LIMIT_WINDOW_SECS)?;
        let demo_user_emails = env::var(ENV_DEMO_USER_EMAILS)
            .unwrap_or_else(|_| DEFAULT_DEMO_USER_EMAILS.to_string())
            .split(',')
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty())
            .collect();

        Ok(Self {
            bind_addr,
            upstream_base_url,
            cache_backend,
            cache_ttl_secs,
            rate_limit_max_requests,
            rate_limit_window_secs,
            demo_user_emails,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Base URL of the upstream news site.
    pub fn upstream_base_url(&self) -> &str {
        &self.upstream_base_url
    }
    /// Which cache store to use: `memory` or `off`.
    pub fn cache_backend(&self) -> &str {
        &self.cache_backend
    }
    /// How long cached article listings stay valid.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }
    pub fn rate_limit_max_requests(&self) -> u32 {
        self.rate_limit_max_requests
    }
    pub fn rate_limit_window_secs(&self) -> i64 {
        self.rate_limit_window_secs
    }
    /// Emails seeded into the in-memory identity provider.
    pub fn demo_user_emails(&self) -> Vec<String> {
        self.demo_user_emails.clone()
    }
}

fn parse_env<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: err.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
