//! HTTP surface for QueryDesk.
//!
//! Routes:
//! - `POST /translate` - translate a customer query and draft a reply
//! - `GET /debug/models` - live provider model listing for diagnostics
//! - `GET /` - landing page
//!
//! All state is built once at startup and handed to handlers read-only via
//! axum state; request handling never mutates it.

use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use querydesk_core::Config;
use querydesk_core::GeminiClient;
use querydesk_core::RequestError;
use querydesk_core::Translator;
use querydesk_core::select_model;
use querydesk_core::selection::list_descriptors;

/// Shared handler state, immutable after startup.
///
/// `client` is present whenever a credential was configured; `translator`
/// additionally requires model selection to have succeeded.
#[derive(Clone)]
pub struct AppState {
    client: Option<GeminiClient>,
    translator: Option<Translator>,
}

impl AppState {
    pub fn new(client: Option<GeminiClient>, translator: Option<Translator>) -> Self {
        Self { client, translator }
    }
}

/// Build the startup state from configuration.
///
/// Never fails: a missing credential or a failed model selection leaves the
/// corresponding slot empty and the failure surfaces on first request.
pub async fn build_state(config: &Config) -> AppState {
    let Some(api_key) = config.api_key.clone() else {
        tracing::warn!("GEMINI_API_KEY is not set; translation is disabled");
        return AppState::new(None, None);
    };

    let client = match GeminiClient::new(api_key, config.base_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("failed to build Gemini client: {e}");
            return AppState::new(None, None);
        }
    };

    let translator = match select_model(&client).await {
        Ok(model) => {
            tracing::info!("initialized model: {}", model.name());
            Some(Translator::new(client.clone(), model))
        }
        Err(e) => {
            tracing::warn!("model selection failed: {e}");
            None
        }
    };

    AppState::new(Some(client), translator)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/translate", post(translate))
        .route("/debug/models", get(debug_models))
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn run(listen: SocketAddr, config: Config) -> anyhow::Result<()> {
    let state = build_state(&config).await;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

#[derive(Deserialize)]
struct TranslateBody {
    #[serde(default)]
    query: String,
}

#[derive(Serialize)]
struct TranslateResponse {
    success: bool,
    original: String,
    translated: String,
    response: String,
}

async fn index() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>QueryDesk</title></head>\
         <body><h1>QueryDesk</h1>\
         <p>POST /translate with a JSON body {\"query\": \"...\"}.</p>\
         </body></html>",
    )
}

async fn translate(State(state): State<AppState>, Json(body): Json<TranslateBody>) -> Response {
    // Empty input is rejected before the configuration check, so an
    // unconfigured server still returns 400 for an empty query.
    let result = match &state.translator {
        Some(translator) => translator.translate(&body.query).await,
        None if body.query.trim().is_empty() => Err(RequestError::EmptyInput),
        None => Err(RequestError::NotConfigured),
    };

    match result {
        Ok(outcome) => Json(TranslateResponse {
            success: true,
            original: outcome.original_query,
            translated: outcome.translated_text,
            response: outcome.generated_reply,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!("translate request failed: {e}");
            error_response(&e)
        }
    }
}

async fn debug_models(State(state): State<AppState>) -> Response {
    let Some(client) = &state.client else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "API key not configured"})),
        )
            .into_response();
    };

    match list_descriptors(client).await {
        Ok(descriptors) => {
            let models: Vec<ModelInfo> = descriptors
                .into_iter()
                .map(|d| ModelInfo {
                    supports_generate_content: d.supports_generation(),
                    name: d.name,
                    full_name: d.full_name,
                    methods: d.supported_methods,
                })
                .collect();
            Json(json!({
                "success": true,
                "current_model": state.translator.as_ref().map(Translator::model_name),
                "models": models,
            }))
            .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

#[derive(Serialize)]
struct ModelInfo {
    name: String,
    full_name: String,
    #[serde(rename = "supports_generateContent")]
    supports_generate_content: bool,
    methods: Vec<String>,
}

/// Map a request error to its HTTP status, matched exhaustively.
fn error_response(e: &RequestError) -> Response {
    let status = match e {
        RequestError::EmptyInput => StatusCode::BAD_REQUEST,
        RequestError::NotConfigured | RequestError::Generation(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({"error": e.to_string()}))).into_response()
}
