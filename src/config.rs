//! Application configuration loaded from environment variables.
//!
//! The backend base URL is resolved once at startup and handed to the
//! backend client; nothing else reads the environment.

use std::env;

/// Port the OctoFit backend listens on inside a Codespace.
const CODESPACE_BACKEND_PORT: u16 = 8000;

/// Backend used when neither an explicit URL nor a Codespace is configured.
const LOCAL_BACKEND_URL: &str = "http://localhost:8000";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OctoFit REST backend, without a trailing slash
    pub api_base_url: String,
    /// Dashboard server port
    pub port: u16,
    /// Timeout applied to every backend request
    pub request_timeout_secs: u64,
}

impl Config {
    /// Config for tests, pointing at a local backend.
    pub fn test_default() -> Self {
        Self {
            api_base_url: LOCAL_BACKEND_URL.to_string(),
            port: 3000,
            request_timeout_secs: 10,
        }
    }

    /// Same config with another backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `API_BASE_URL` wins when set. Otherwise `CODESPACE_NAME` is
    /// interpolated into the Codespace forwarding hostname, and failing
    /// that the local backend is used.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = resolve_base_url(
            env::var("API_BASE_URL").ok(),
            env::var("CODESPACE_NAME").ok(),
        )?;

        Ok(Self {
            api_base_url,
            port: parse_var("PORT", 3000)?,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", 10)?,
        })
    }
}

/// Pick the backend base URL from the explicit override or the Codespace name.
pub fn resolve_base_url(
    explicit: Option<String>,
    codespace_name: Option<String>,
) -> Result<String, ConfigError> {
    if let Some(url) = explicit.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "API_BASE_URL",
                value: url,
            });
        }
        return Ok(url.trim_end_matches('/').to_string());
    }

    match codespace_name.map(|v| v.trim().to_string()) {
        Some(name) if !name.is_empty() => Ok(format!(
            "https://{}-{}.app.github.dev",
            name, CODESPACE_BACKEND_PORT
        )),
        _ => Ok(LOCAL_BACKEND_URL.to_string()),
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
