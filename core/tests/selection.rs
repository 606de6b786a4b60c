use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

use querydesk_core::ConfigError;
use querydesk_core::GeminiClient;
use querydesk_core::select_model;

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key".to_string(), server.uri()).expect("client builds")
}

async fn mount_listing(server: &MockServer, models: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": models })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn preferred_model_selected_from_listing() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        json!([
            {"name": "models/gemini-pro",
             "supportedGenerationMethods": ["generateContent"]},
            {"name": "models/gemini-1.5-flash",
             "supportedGenerationMethods": ["generateContent", "countTokens"]},
            {"name": "models/embedding-001",
             "supportedGenerationMethods": ["embedContent"]}
        ]),
    )
    .await;

    let model = select_model(&client_for(&server)).await.expect("selects");
    assert_eq!(model.name(), "gemini-1.5-flash");
}

#[tokio::test]
async fn first_suitable_model_selected_when_no_preference_matches() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        json!([
            {"name": "models/gemini-exp-1206",
             "supportedGenerationMethods": ["generateContent"]},
            {"name": "models/gemini-exp-0801",
             "supportedGenerationMethods": ["generateContent"]}
        ]),
    )
    .await;

    let model = select_model(&client_for(&server)).await.expect("selects");
    assert_eq!(model.name(), "gemini-exp-1206");
}

#[tokio::test]
async fn empty_suitable_set_is_a_config_error() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        json!([
            {"name": "models/embedding-001",
             "supportedGenerationMethods": ["embedContent"]},
            {"name": "models/aqa"}
        ]),
    )
    .await;

    let err = select_model(&client_for(&server))
        .await
        .expect_err("no suitable model");
    assert!(matches!(err, ConfigError::NoSuitableModel));
}

#[tokio::test]
async fn listing_failure_falls_back_to_known_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(500).set_body_string("listing unavailable"))
        .mount(&server)
        .await;

    let model = select_model(&client_for(&server)).await.expect("fallback");
    assert_eq!(model.name(), "gemini-1.5-flash");
}
