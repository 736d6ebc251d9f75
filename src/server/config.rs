//! Environment configuration for the server.

use crate::server::error::config::ConfigError;

/// Identity provider used when `IDENTITY_API_URL` is not set
pub const DEFAULT_IDENTITY_API_URL: &str = "https://api.github.com";

/// Settings read from the environment at startup
#[derive(Clone, Debug)]
pub struct Config {
    /// SeaORM connection string
    pub database_url: String,
    /// HMAC secret used to sign session tokens
    pub auth_secret: String,
    /// Public origin of the API, allowed by CORS
    pub api_host: String,
    /// Base URL of the identity provider
    pub identity_api_url: String,
    /// User agent sent to the identity provider
    pub user_agent: String,
}

impl Config {
    /// Reads the configuration from process environment variables
    ///
    /// # Returns
    /// - `Ok(Config)`: All required variables are present and valid
    /// - `Err(ConfigError::MissingEnvVar)`: A required variable is unset
    /// - `Err(ConfigError::InvalidEnvValue)`: A variable is set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let auth_secret = required("AUTH_SECRET")?;
        if auth_secret.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "AUTH_SECRET".to_string(),
                reason: "secret must not be empty".to_string(),
            });
        }

        let api_host = required("API_HOST")?;
        if axum::http::HeaderValue::from_str(&api_host).is_err() {
            return Err(ConfigError::InvalidEnvValue {
                var: "API_HOST".to_string(),
                reason: "not a valid header value".to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            auth_secret,
            api_host,
            identity_api_url: lookup("IDENTITY_API_URL")
                .unwrap_or_else(|| DEFAULT_IDENTITY_API_URL.to_string()),
            user_agent: lookup("USER_AGENT")
                .unwrap_or_else(|| format!("wordlist/{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}
