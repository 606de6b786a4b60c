//! Core library for QueryDesk, a customer-query translation service backed
//! by the Gemini API.
//!
//! This crate provides:
//! - `GeminiClient` - typed HTTP client for the provider
//! - `select_model` - startup model discovery and selection
//! - `Translator` - the two-step translate-then-reply request handler
//! - `Config` - environment-sourced process configuration

pub mod config;
pub mod error;
pub mod gemini;
pub mod selection;
pub mod translate;

pub use config::Config;
pub use error::ConfigError;
pub use error::ProviderError;
pub use error::RequestError;
pub use gemini::GeminiClient;
pub use selection::ModelDescriptor;
pub use selection::SelectedModel;
pub use selection::select_model;
pub use translate::TranslationOutcome;
pub use translate::Translator;
