//! End-to-end tests over the real reqwest transport against a local mock server.

use std::time::Duration;

use serde_json::json;
use studio_gateway::error::{RequestFailure, TransportReason};
use studio_gateway::{
    DefaultCredentials, GenerationError, ImageRequest, ImageTier, ProviderConfig, StudioGateway,
    TextRequest,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> StudioGateway {
    StudioGateway::builder()
        .base_url(server.uri())
        .credentials(DefaultCredentials::none().with_gemini_api_key("env-key"))
        .http_debug(true)
        .build()
        .unwrap()
}

#[tokio::test]
async fn openai_chat_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "model": "gpt-4o",
            "messages": [{ "role": "user", "content": "Hello" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Hello! How can I help you today?" },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = gateway_for(&server)
        .text()
        .generate(&ProviderConfig::openai("test-api-key"), &TextRequest::new("Hello"))
        .await
        .unwrap();
    assert_eq!(text, "Hello! How can I help you today?");
}

#[tokio::test]
async fn gemini_paid_image_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-3-pro-image-preview:generateContent"))
        .and(header("x-goog-api-key", "env-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
            ]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = gateway_for(&server)
        .images()
        .generate(&ImageRequest::new("a logo").with_tier(ImageTier::Paid))
        .await
        .unwrap();
    assert_eq!(image.data, "iVBORw0KGgo=");
}

#[tokio::test]
async fn gemini_listing_sends_key_as_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("key", "env-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{ "name": "models/gemini-2.5-flash" }]
        })))
        .mount(&server)
        .await;

    let models = gateway_for(&server)
        .models()
        .list_models(&ProviderConfig::gemini(None))
        .await
        .unwrap();
    assert_eq!(models, vec!["gemini-2.5-flash"]);
}

#[tokio::test]
async fn error_status_and_body_are_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "model 'llama3' not found, try pulling it first"
        })))
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .text()
        .generate(&ProviderConfig::ollama(), &TextRequest::new("hello"))
        .await
        .unwrap_err();

    match err {
        GenerationError::ProviderRequest {
            failure: RequestFailure::Status { status: 404, body },
            ..
        } => assert!(body.contains("try pulling it first")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn slow_backend_times_out_as_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let gateway = StudioGateway::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = gateway
        .text()
        .generate(&ProviderConfig::ollama(), &TextRequest::new("hello"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GenerationError::ProviderRequest {
            failure: RequestFailure::Transport(TransportReason::Timeout),
            ..
        }
    ));
    assert!(err.http_status().is_none());
}

#[tokio::test]
async fn non_json_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .models()
        .list_models(&ProviderConfig::openrouter("or"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::InvalidResponse { .. }));
    assert!(err.is_discovery_failure());
}
