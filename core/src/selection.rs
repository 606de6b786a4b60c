//! Model discovery and selection.
//!
//! Queries the provider for its model listing, filters to models that
//! support content generation, and picks one by a fixed preference order.
//! When the listing call itself fails, falls back to constructing a handle
//! from a short list of well-known model names.

use crate::error::ConfigError;
use crate::gemini::GeminiClient;
use crate::gemini::ListedModel;

/// Preference order for generation-capable models. Flash models first
/// (faster, free tier), then pro.
const PREFERRED_MODELS: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-flash-latest",
    "gemini-1.5-pro",
    "gemini-1.5-pro-latest",
    "gemini-pro",
    "gemini-pro-latest",
];

/// Names tried, in order, when the listing call itself fails. A handle
/// constructed this way is unverified: the model may still reject calls.
const FALLBACK_MODELS: &[&str] = &["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];

/// The operation a model must support to be eligible for selection.
const GENERATE_CONTENT: &str = "generateContent";

/// Provider-reported metadata for one model, normalized for selection.
#[derive(Debug, Clone)]
pub struct ModelDescriptor {
    /// Name with any `models/` prefix stripped.
    pub name: String,
    /// Name exactly as returned by the provider.
    pub full_name: String,
    /// Operations the provider reports for this model.
    pub supported_methods: Vec<String>,
}

impl ModelDescriptor {
    pub fn from_listed(listed: ListedModel) -> Self {
        let name = normalize_model_name(&listed.name).to_string();
        Self {
            name,
            full_name: listed.name,
            supported_methods: listed.supported_generation_methods,
        }
    }

    /// Whether this model can serve generation requests.
    pub fn supports_generation(&self) -> bool {
        self.supported_methods.iter().any(|m| m == GENERATE_CONTENT)
    }
}

/// The model chosen at startup. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct SelectedModel {
    name: String,
}

impl SelectedModel {
    /// Construct a handle directly from a model name, without consulting the
    /// provider. Succeeding here only means a local handle exists; the model
    /// may still be unusable at generation time.
    pub fn attach(name: &str) -> Result<Self, ConfigError> {
        if name.trim().is_empty() {
            return Err(ConfigError::NoSuitableModel);
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Fetch the provider's model listing as normalized descriptors, in
/// provider-returned order.
pub async fn list_descriptors(
    client: &GeminiClient,
) -> Result<Vec<ModelDescriptor>, crate::error::ProviderError> {
    let listed = client.list_models().await?;
    Ok(listed.into_iter().map(ModelDescriptor::from_listed).collect())
}

/// Select a model for content generation.
///
/// Primary path: list the provider's models, keep those supporting
/// `generateContent`, and return the first preference-order hit, else the
/// first suitable entry. If the listing call fails, attach a handle to the
/// first fallback name that constructs.
pub async fn select_model(client: &GeminiClient) -> Result<SelectedModel, ConfigError> {
    let descriptors = match list_descriptors(client).await {
        Ok(descriptors) => descriptors,
        Err(e) => {
            tracing::warn!("failed to list models: {e}; trying fallback names");
            return attach_fallback();
        }
    };

    let suitable = filter_suitable(descriptors);
    match pick_preferred(&suitable) {
        Some(name) => {
            tracing::info!("selected model: {name}");
            SelectedModel::attach(name)
        }
        None => Err(ConfigError::NoSuitableModel),
    }
}

/// Keep only generation-capable descriptors, logging the full listing for
/// operational visibility. Order is preserved as returned by the provider.
fn filter_suitable(descriptors: Vec<ModelDescriptor>) -> Vec<ModelDescriptor> {
    let mut suitable = Vec::new();
    for descriptor in descriptors {
        if descriptor.supports_generation() {
            tracing::info!("model {} supports generateContent", descriptor.name);
            suitable.push(descriptor);
        } else {
            tracing::info!("model {} does not support generateContent", descriptor.name);
        }
    }
    suitable
}

/// First preference-order name present in the suitable set, else the first
/// suitable entry in provider-returned order.
fn pick_preferred(suitable: &[ModelDescriptor]) -> Option<&str> {
    for preferred in PREFERRED_MODELS.iter().copied() {
        if suitable.iter().any(|d| d.name == preferred) {
            return Some(preferred);
        }
    }
    suitable.first().map(|d| d.name.as_str())
}

fn attach_fallback() -> Result<SelectedModel, ConfigError> {
    for name in FALLBACK_MODELS {
        match SelectedModel::attach(name) {
            Ok(model) => {
                tracing::info!("using fallback model: {name}");
                return Ok(model);
            }
            Err(_) => continue,
        }
    }
    Err(ConfigError::NoSuitableModel)
}

/// Strip a literal `models/` prefix if present.
fn normalize_model_name(name: &str) -> &str {
    name.strip_prefix("models/").unwrap_or(name)
}
