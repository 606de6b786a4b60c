//! Error types for model selection and translation requests.

use thiserror::Error;

/// Error talking to the Gemini API.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network error during the API call.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the API response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Startup configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No credential was provided, so no client could be built.
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    /// The provider reported no model that supports content generation.
    #[error("no suitable model found that supports generateContent")]
    NoSuitableModel,
}

/// Error surfaced by a single translation request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The query was empty after trimming.
    #[error("Please enter a query")]
    EmptyInput,

    /// No model was selected at startup.
    #[error("Gemini API key not configured. Please set GEMINI_API_KEY in your environment.")]
    NotConfigured,

    /// One of the two generation calls failed; carries the provider message.
    #[error("{0}")]
    Generation(String),
}

impl From<ProviderError> for RequestError {
    fn from(e: ProviderError) -> Self {
        Self::Generation(e.to_string())
    }
}
