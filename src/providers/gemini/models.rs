//! Gemini model listing.

use super::types::ListModelsResponse;

const MODEL_PREFIX: &str = "models/";

/// Listing authenticates with the `key` query parameter.
pub fn list_models_url(base_url: &str, api_key: &str) -> String {
    format!("{base_url}/models?key={}", urlencoding::encode(api_key))
}

/// Resource names come back as `models/<id>`; callers want the bare id.
pub fn model_ids(response: ListModelsResponse) -> Vec<String> {
    response
        .models
        .into_iter()
        .map(|model| match model.name.strip_prefix(MODEL_PREFIX) {
            Some(id) => id.to_string(),
            None => model.name,
        })
        .collect()
}
