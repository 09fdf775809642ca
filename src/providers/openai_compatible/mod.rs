//! OpenAI-compatible backends.
//!
//! OpenAI and OpenRouter share the chat-completions schema, bearer auth and
//! the `/models` listing; they differ in base URL and default model.

pub mod chat;
pub mod types;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{GenerationError, Operation};
use crate::execution::http::ProviderHeaders;
use crate::runtime::GatewayRuntime;
use crate::types::{ModelDefaults, ProviderKind, TextRequest};
use types::{ChatCompletionResponse, ModelsResponse};

/// Which OpenAI-compatible service a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    OpenAi,
    OpenRouter,
}

impl Flavor {
    pub const fn kind(self) -> ProviderKind {
        match self {
            Self::OpenAi => ProviderKind::OpenAi,
            Self::OpenRouter => ProviderKind::OpenRouter,
        }
    }

    pub fn default_model(self, defaults: &ModelDefaults) -> &str {
        match self {
            Self::OpenAi => &defaults.openai,
            Self::OpenRouter => &defaults.openrouter,
        }
    }
}

/// Bearer key for `flavor`; a blank key fails before any request is sent.
fn require_key(flavor: Flavor, api_key: &SecretString) -> Result<&str, GenerationError> {
    let key = api_key.expose_secret();
    if key.trim().is_empty() {
        return Err(GenerationError::MissingApiKey {
            provider: flavor.kind(),
        });
    }
    Ok(key)
}

pub(crate) async fn generate_text(
    runtime: &GatewayRuntime,
    flavor: Flavor,
    api_key: &SecretString,
    model: Option<&str>,
    request: &TextRequest,
) -> Result<String, GenerationError> {
    let provider = flavor.kind();
    let operation = Operation::Generation;
    let key = require_key(flavor, api_key)?;
    let model = model.unwrap_or_else(|| flavor.default_model(&runtime.models));
    let url = format!("{}/chat/completions", runtime.endpoints.base_url(provider));
    let body = serde_json::to_value(chat::build_chat_request(model, request))?;

    tracing::debug!(target: "studio_gateway::http", %provider, %operation, model, "dispatch");
    let response: ChatCompletionResponse = runtime
        .executor
        .post_json(
            provider,
            operation,
            url,
            ProviderHeaders::bearer(key)?,
            body,
        )
        .await?;
    response
        .into_text()
        .map_err(|message| GenerationError::invalid_response(provider, operation, message))
}

pub(crate) async fn list_models(
    runtime: &GatewayRuntime,
    flavor: Flavor,
    api_key: &SecretString,
) -> Result<Vec<String>, GenerationError> {
    let provider = flavor.kind();
    let operation = Operation::ModelDiscovery;
    let key = require_key(flavor, api_key)?;
    let url = format!("{}/models", runtime.endpoints.base_url(provider));

    tracing::debug!(target: "studio_gateway::http", %provider, %operation, "dispatch");
    let response: ModelsResponse = runtime
        .executor
        .get_json(
            provider,
            operation,
            url,
            ProviderHeaders::bearer(key)?,
        )
        .await?;
    Ok(response.data.into_iter().map(|m| m.id).collect())
}
