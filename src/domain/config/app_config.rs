//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::Language;

/// Default base URL of the note backend
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server_url: Option<String>,
    pub auth_token: Option<String>,
    pub language: Option<String>,
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            server_url: Some(DEFAULT_SERVER_URL.to_string()),
            auth_token: None,
            language: Some("en".to_string()),
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            server_url: other.server_url.or(self.server_url),
            auth_token: other.auth_token.or(self.auth_token),
            language: other.language.or(self.language),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get the server URL, or the default if not set
    pub fn server_url_or_default(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Get language as parsed Language, or default if not set/invalid
    pub fn language_or_default(&self) -> Language {
        self.language
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_server_and_language() {
        let config = AppConfig::defaults();
        assert_eq!(config.server_url_or_default(), DEFAULT_SERVER_URL);
        assert_eq!(config.language_or_default(), Language::En);
        assert!(!config.notify_or_default());
    }

    #[test]
    fn merge_prefers_other() {
        let base = AppConfig {
            server_url: Some("http://base".to_string()),
            language: Some("en".to_string()),
            ..Default::default()
        };
        let other = AppConfig {
            server_url: Some("http://other".to_string()),
            notify: Some(true),
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.server_url.as_deref(), Some("http://other"));
        assert_eq!(merged.language.as_deref(), Some("en"));
        assert_eq!(merged.notify, Some(true));
    }

    #[test]
    fn invalid_language_falls_back_to_default() {
        let config = AppConfig {
            language: Some("klingon".to_string()),
            ..Default::default()
        };
        assert_eq!(config.language_or_default(), Language::En);
    }
}
