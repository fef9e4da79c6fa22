//! Configuration module for environment variable parsing.
//!
//! Everything is read once at startup and handed to the server and the
//! verification client. Request handlers never touch the environment.

use std::env;
use tracing::warn;

/// Default base URL of the PocketSign Verify API (mock environment).
pub const DEFAULT_VERIFY_ENDPOINT: &str = "https://verify.mock.p8n.app";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the PocketSign Verify API
    pub pocket_sign_api_key: Option<String>,

    /// Base URL of the verification service
    pub verify_endpoint: String,

    /// Outbound HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// Port for the web server to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            pocket_sign_api_key: parse_secret("POCKET_SIGN_API_KEY"),

            verify_endpoint: env::var("POCKET_SIGN_VERIFY_ENDPOINT")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_VERIFY_ENDPOINT.to_string()),

            request_timeout_ms: parse_number("REQUEST_TIMEOUT_MS", 30_000),

            port: parse_number("PORT", 8080),
        }
    }

    /// The API token, if one is configured.
    pub fn api_token(&self) -> Option<&str> {
        self.pocket_sign_api_key.as_deref()
    }
}

/// Read a secret, treating empty and whitespace-only values as unset.
fn parse_secret(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a numeric variable, falling back to `default` when unset or invalid.
fn parse_number<T: std::str::FromStr>(name: &str, default: T) -> T {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid numeric value, using default");
            default
        }
    }
}
