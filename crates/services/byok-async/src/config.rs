use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::ByokError;

/// Default BYOK API base URL
pub const BYOK_DEFAULT_BASE: &str = "https://byok.gg";
/// Header carrying the acting player/user id
pub const HDR_BYOK_USER: &str = "x-byok-user";
/// Header carrying a worker session token
pub const HDR_BYOK_SESSION: &str = "x-byok-session";

/// Environment variable holding the SDK API key
pub const ENV_API_KEY: &str = "BYOK_API_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "BYOK_BASE_URL";
/// Environment variable holding the default user id
pub const ENV_USER_ID: &str = "BYOK_USER_ID";

/// Configuration for the BYOK client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct ByokConfig {
    api_base: String,
    api_key: Option<SecretString>,
    default_user_id: Option<String>,
}

/// Helper to read and normalize an env var (trim + filter empty).
fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for ByokConfig {
    fn default() -> Self {
        Self {
            api_base: env_trimmed(ENV_BASE_URL).unwrap_or_else(|| BYOK_DEFAULT_BASE.into()),
            api_key: env_trimmed(ENV_API_KEY).map(SecretString::from),
            default_user_id: env_trimmed(ENV_USER_ID),
        }
    }
}

impl ByokConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `BYOK_API_KEY` for the SDK API key (e.g. `byok_sk_...`)
    /// - `BYOK_BASE_URL` for a custom API base URL (defaults to `https://byok.gg`)
    /// - `BYOK_USER_ID` for the default `X-Byok-User` value
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the SDK API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Sets the user id sent in `X-Byok-User` when a call does not override it
    #[must_use]
    pub fn with_default_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.default_user_id = Some(user_id.into());
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait for the BYOK client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns the authentication headers included in every request
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, ByokError>;

    /// Returns the client-level default user id, if any
    fn default_user_id(&self) -> Option<&str>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in requests
    fn query(&self) -> Vec<(&str, &str)>;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), ByokError>;
}

impl Config for ByokConfig {
    fn headers(&self) -> Result<HeaderMap, ByokError> {
        let mut h = HeaderMap::new();

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                h.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {key}"))
                        .map_err(|_| ByokError::Config("Invalid Authorization header".into()))?,
                );
            }
        }

        Ok(h)
    }

    fn default_user_id(&self) -> Option<&str> {
        self.default_user_id.as_deref()
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }

    fn validate_auth(&self) -> Result<(), ByokError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(ByokError::Config(
                "Missing BYOK credentials: set BYOK_API_KEY or call with_api_key".into(),
            )),
        }
    }
}
