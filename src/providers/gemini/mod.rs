//! Google Gemini backend.
//!
//! Text generation, image analysis, image generation and editing all go
//! through `models/{model}:generateContent`; they differ only in the body.

pub mod image;
pub mod models;
pub mod text;
pub mod types;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{GenerationError, Operation};
use crate::execution::http::ProviderHeaders;
use crate::runtime::GatewayRuntime;
use crate::types::{
    GeneratedImage, ImageEditRequest, ImageRequest, ProviderKind, SourceImage, TextRequest,
};
use types::{GenerateContentRequest, GenerateContentResponse, ListModelsResponse};

const PROVIDER: ProviderKind = ProviderKind::Gemini;

fn require_key<'a>(
    runtime: &'a GatewayRuntime,
    caller: Option<&'a SecretString>,
) -> Result<&'a SecretString, GenerationError> {
    runtime
        .credentials
        .resolve_gemini(caller)
        .ok_or(GenerationError::MissingApiKey { provider: PROVIDER })
}

async fn generate_content(
    runtime: &GatewayRuntime,
    operation: Operation,
    api_key: &SecretString,
    model: &str,
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse, GenerationError> {
    let url = format!(
        "{}/models/{model}:generateContent",
        runtime.endpoints.base_url(PROVIDER)
    );
    tracing::debug!(target: "studio_gateway::http", provider = %PROVIDER, %operation, model, "dispatch");
    runtime
        .executor
        .post_json(
            PROVIDER,
            operation,
            url,
            ProviderHeaders::gemini(api_key.expose_secret())?,
            serde_json::to_value(request)?,
        )
        .await
}

pub(crate) async fn generate_text(
    runtime: &GatewayRuntime,
    api_key: Option<&SecretString>,
    model: Option<&str>,
    request: &TextRequest,
) -> Result<String, GenerationError> {
    let api_key = require_key(runtime, api_key)?;
    let model = text::resolve_model(model, request.reasoning_effort, &runtime.models);
    let body = text::build_text_request(request);
    let response =
        generate_content(runtime, Operation::Generation, api_key, model, &body).await?;
    Ok(text::extract_text(&response))
}

/// Vision chat; defaults to the high-effort model.
pub(crate) async fn analyze_image(
    runtime: &GatewayRuntime,
    api_key: Option<&SecretString>,
    model: Option<&str>,
    prompt: &str,
    source: &SourceImage,
) -> Result<String, GenerationError> {
    let api_key = require_key(runtime, api_key)?;
    let model = text::resolve_analysis_model(model, &runtime.models);
    let body = text::build_analysis_request(prompt, source);
    let response =
        generate_content(runtime, Operation::Generation, api_key, model, &body).await?;
    Ok(text::extract_text(&response))
}

pub(crate) async fn generate_image(
    runtime: &GatewayRuntime,
    request: &ImageRequest,
) -> Result<GeneratedImage, GenerationError> {
    let operation = Operation::ImageGeneration;
    let api_key = require_key(runtime, request.api_key.as_ref())?;
    let model = image::capabilities(request.tier).model.name(&runtime.models);
    let body = image::build_image_request(
        &request.prompt,
        request.tier,
        request.size,
        request.aspect_ratio,
    );
    let response = generate_content(runtime, operation, api_key, model, &body).await?;
    image::extract_image(&response, operation)
}

pub(crate) async fn edit_image(
    runtime: &GatewayRuntime,
    request: &ImageEditRequest,
) -> Result<GeneratedImage, GenerationError> {
    let operation = Operation::ImageEdit;
    let api_key = require_key(runtime, request.api_key.as_ref())?;
    let model = image::EDIT_MODEL.name(&runtime.models);
    let body = image::build_edit_request(&request.prompt, &request.source);
    let response = generate_content(runtime, operation, api_key, model, &body).await?;
    image::extract_image(&response, operation)
}

pub(crate) async fn list_models(
    runtime: &GatewayRuntime,
    api_key: Option<&SecretString>,
) -> Result<Vec<String>, GenerationError> {
    let operation = Operation::ModelDiscovery;
    let api_key = require_key(runtime, api_key)?;
    let url = models::list_models_url(
        runtime.endpoints.base_url(PROVIDER),
        api_key.expose_secret(),
    );
    tracing::debug!(target: "studio_gateway::http", provider = %PROVIDER, %operation, "dispatch");
    let response: ListModelsResponse = runtime
        .executor
        .get_json(PROVIDER, operation, url, ProviderHeaders::json())
        .await?;
    Ok(models::model_ids(response))
}
