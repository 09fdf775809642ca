//! Local Ollama server.
//!
//! Unauthenticated. `/api/generate` has no system channel, so the instruction
//! is folded into the prompt.

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Operation};
use crate::execution::http::ProviderHeaders;
use crate::runtime::GatewayRuntime;
use crate::types::{ProviderKind, TextRequest};

const PROVIDER: ProviderKind = ProviderKind::Ollama;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<LocalModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalModel {
    pub name: String,
}

/// `"{system}\n\n{prompt}"` when an instruction is present.
pub fn build_generate_request(model: &str, request: &TextRequest) -> GenerateRequest {
    let prompt = match &request.system_instruction {
        Some(system) => format!("{system}\n\n{}", request.prompt),
        None => request.prompt.clone(),
    };
    GenerateRequest {
        model: model.to_string(),
        prompt,
        stream: false,
    }
}

pub(crate) async fn generate_text(
    runtime: &GatewayRuntime,
    model: Option<&str>,
    request: &TextRequest,
) -> Result<String, GenerationError> {
    let operation = Operation::Generation;
    let model = model.unwrap_or(runtime.models.ollama.as_str());
    let url = format!("{}/api/generate", runtime.endpoints.base_url(PROVIDER));
    let body = serde_json::to_value(build_generate_request(model, request))?;

    tracing::debug!(target: "studio_gateway::http", provider = %PROVIDER, %operation, model, "dispatch");
    let response: GenerateResponse = runtime
        .executor
        .post_json(PROVIDER, operation, url, ProviderHeaders::json(), body)
        .await?;
    Ok(response.response)
}

pub(crate) async fn list_models(runtime: &GatewayRuntime) -> Result<Vec<String>, GenerationError> {
    let operation = Operation::ModelDiscovery;
    let url = format!("{}/api/tags", runtime.endpoints.base_url(PROVIDER));

    tracing::debug!(target: "studio_gateway::http", provider = %PROVIDER, %operation, "dispatch");
    let response: TagsResponse = runtime
        .executor
        .get_json(PROVIDER, operation, url, ProviderHeaders::json())
        .await?;
    Ok(response.models.into_iter().map(|m| m.name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn system_instruction_is_folded_into_prompt() {
        let req = TextRequest::new("list three colors").with_system_instruction("Be terse.");
        let body = serde_json::to_value(build_generate_request("llama3", &req)).unwrap();
        assert_eq!(
            body,
            json!({ "model": "llama3", "prompt": "Be terse.\n\nlist three colors", "stream": false })
        );
    }

    #[test]
    fn plain_prompt_passes_through() {
        let body = build_generate_request("llama3", &TextRequest::new("hello"));
        assert_eq!(body.prompt, "hello");
        assert!(!body.stream);
    }

    #[test]
    fn tags_names_are_kept_verbatim() {
        let resp: TagsResponse = serde_json::from_value(json!({
            "models": [{ "name": "llama3:latest", "size": 1 }, { "name": "models/mistral" }]
        }))
        .unwrap();
        let names: Vec<_> = resp.models.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["llama3:latest", "models/mistral"]);
    }
}
