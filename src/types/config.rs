//! Endpoint and default-model configuration.

use serde::{Deserialize, Serialize};

use super::provider::ProviderKind;
use crate::defaults;

/// Base URL per backend. Override to point at a proxy or a test server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub gemini: String,
    pub openai: String,
    pub openrouter: String,
    pub ollama: String,
}

impl Endpoints {
    /// Point every backend at the same base URL.
    pub fn all(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            gemini: base_url.clone(),
            openai: base_url.clone(),
            openrouter: base_url.clone(),
            ollama: base_url,
        }
    }

    pub fn base_url(&self, provider: ProviderKind) -> &str {
        let url = match provider {
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::OpenRouter => &self.openrouter,
            ProviderKind::Ollama => &self.ollama,
        };
        url.trim_end_matches('/')
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gemini: defaults::endpoints::GEMINI.to_string(),
            openai: defaults::endpoints::OPENAI.to_string(),
            openrouter: defaults::endpoints::OPENROUTER.to_string(),
            ollama: defaults::endpoints::OLLAMA.to_string(),
        }
    }
}

/// Models used when a request leaves the model blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefaults {
    pub gemini_fast: String,
    pub gemini_high_effort: String,
    pub gemini_free_image: String,
    pub gemini_paid_image: String,
    pub openai: String,
    pub openrouter: String,
    pub ollama: String,
}

impl Default for ModelDefaults {
    fn default() -> Self {
        Self {
            gemini_fast: defaults::models::GEMINI_FAST.to_string(),
            gemini_high_effort: defaults::models::GEMINI_HIGH_EFFORT.to_string(),
            gemini_free_image: defaults::models::GEMINI_FREE_IMAGE.to_string(),
            gemini_paid_image: defaults::models::GEMINI_PAID_IMAGE.to_string(),
            openai: defaults::models::OPENAI_CHAT.to_string(),
            openrouter: defaults::models::OPENROUTER_CHAT.to_string(),
            ollama: defaults::models::OLLAMA.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let endpoints = Endpoints::all("http://127.0.0.1:9000/");
        for kind in ProviderKind::ALL {
            assert_eq!(endpoints.base_url(kind), "http://127.0.0.1:9000");
        }
        assert_eq!(
            Endpoints::default().base_url(ProviderKind::Ollama),
            "http://localhost:11434"
        );
    }
}
