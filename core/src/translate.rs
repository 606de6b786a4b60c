//! Translation request handling.
//!
//! Two strictly sequential generation calls per request: translate the
//! query to English, then draft a short professional reply to the
//! translated text. Either call failing fails the whole request; there is
//! no partial result and no retry.

use crate::error::RequestError;
use crate::gemini::GeminiClient;
use crate::selection::SelectedModel;

/// Translation service bound to the model selected at startup.
#[derive(Debug, Clone)]
pub struct Translator {
    client: GeminiClient,
    model: SelectedModel,
}

/// Result of one translate request. Not persisted.
#[derive(Debug)]
pub struct TranslationOutcome {
    /// The query exactly as received, untrimmed.
    pub original_query: String,
    pub translated_text: String,
    pub generated_reply: String,
}

impl Translator {
    pub fn new(client: GeminiClient, model: SelectedModel) -> Self {
        Self { client, model }
    }

    /// Name of the model this translator generates against.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Translate the query to English, then generate a reply to it.
    pub async fn translate(&self, query: &str) -> Result<TranslationOutcome, RequestError> {
        if query.trim().is_empty() {
            return Err(RequestError::EmptyInput);
        }

        let prompt = build_translation_prompt(query);
        let translated_text = self
            .client
            .generate_content(self.model.name(), &prompt)
            .await?
            .trim()
            .to_string();

        let reply_prompt = build_reply_prompt(&translated_text);
        let generated_reply = self
            .client
            .generate_content(self.model.name(), &reply_prompt)
            .await?
            .trim()
            .to_string();

        Ok(TranslationOutcome {
            original_query: query.to_string(),
            translated_text,
            generated_reply,
        })
    }
}

/// Build the translate-to-English prompt.
fn build_translation_prompt(query: &str) -> String {
    format!(
        "Translate the following customer query to English. \
         If the query is already in English, return it as is. \
         Only provide the English translation, nothing else.\n\n\
         Query: {query}\n\n\
         English Translation:"
    )
}

/// Build the reply prompt from the translated query.
fn build_reply_prompt(translated: &str) -> String {
    format!(
        "Based on this customer query in English: \"{translated}\"\n\n\
         Generate a brief, helpful, and professional response. \
         Keep it concise (2-3 sentences max).\n\
         Response:"
    )
}
