//! Client configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use rideops_core::i18n::Language;

/// Default backend base URL.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection and persistence settings for the console client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub api_url: String,
    /// Timeout applied to every request.
    pub request_timeout: Duration,
    /// Where the session (token, language, push token) is persisted.
    /// `None` keeps it in memory only.
    pub session_state_path: Option<PathBuf>,
    /// Language used when none has been persisted yet.
    pub default_language: Language,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_state_path: None,
            default_language: Language::En,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `PUBLIC_API_URL`       | `http://127.0.0.1:8000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `SESSION_STATE_PATH`   | unset (in-memory)       |
    /// | `DEFAULT_LANGUAGE`     | `en`                    |
    ///
    /// Invalid values fall back to their defaults with a warning.
    pub fn from_env() -> Self {
        let api_url = std::env::var("PUBLIC_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs: u64 = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "REQUEST_TIMEOUT_SECS is not a number, using default");
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let session_state_path = std::env::var("SESSION_STATE_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(raw) => Language::parse(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Invalid DEFAULT_LANGUAGE, using en");
                Language::En
            }),
            Err(_) => Language::En,
        };

        Self {
            api_url,
            request_timeout: Duration::from_secs(timeout_secs),
            session_state_path,
            default_language,
        }
    }

    /// Override the base URL (tests point this at a mock server).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.session_state_path.is_none());
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    fn with_api_url_strips_trailing_slash() {
        let config = ClientConfig::default().with_api_url("http://localhost:9000/");
        assert_eq!(config.api_url, "http://localhost:9000");
    }
}
