//! Process configuration.
//!
//! Everything is read once from the environment at startup. The API key is
//! the only secret; without it the server still comes up, but no model is
//! initialized and every translate request fails fast.

use crate::gemini::GEMINI_BASE_URL;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the Gemini base URL (proxies, tests).
pub const BASE_URL_ENV: &str = "QUERYDESK_BASE_URL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key; `None` disables model initialization entirely.
    pub api_key: Option<String>,
    /// Base URL for the Gemini API.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var(API_KEY_ENV),
            base_url: non_empty_var(BASE_URL_ENV).unwrap_or_else(|| GEMINI_BASE_URL.to_string()),
        }
    }

    /// Whether a credential is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Read an environment variable, treating unset and empty the same.
fn non_empty_var(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_gemini() {
        let config = Config::default();
        assert!(!config.has_api_key());
        assert_eq!(config.base_url, GEMINI_BASE_URL);
    }

    #[test]
    fn empty_values_count_as_unset() {
        assert_eq!(non_empty(Some("key".to_string())), Some("key".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }
}
