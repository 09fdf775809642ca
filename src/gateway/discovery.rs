//! Model discovery gateway.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::providers::openai_compatible::Flavor;
use crate::providers::{gemini, ollama, openai_compatible};
use crate::runtime::GatewayRuntime;
use crate::traits::ModelListing;
use crate::types::{ProviderConfig, ProviderKind, ProviderSettings};
use crate::utils::CancelHandle;

/// Lists the models a backend offers.
///
/// Discovery is a convenience: callers should treat a failure (see
/// [`GenerationError::is_discovery_failure`]) as "no suggestions" and let the
/// user type a model name.
#[derive(Clone)]
pub struct ModelDiscoveryGateway {
    runtime: Arc<GatewayRuntime>,
}

impl ModelDiscoveryGateway {
    pub(crate) fn new(runtime: Arc<GatewayRuntime>) -> Self {
        Self { runtime }
    }

    pub async fn list_models(
        &self,
        config: &ProviderConfig,
    ) -> Result<Vec<String>, GenerationError> {
        let rt = &self.runtime;
        match config {
            ProviderConfig::Gemini { api_key, .. } => {
                gemini::list_models(rt, api_key.as_ref()).await
            }
            ProviderConfig::OpenAi { api_key, .. } => {
                openai_compatible::list_models(rt, Flavor::OpenAi, api_key).await
            }
            ProviderConfig::OpenRouter { api_key, .. } => {
                openai_compatible::list_models(rt, Flavor::OpenRouter, api_key).await
            }
            ProviderConfig::Ollama { .. } => ollama::list_models(rt).await,
        }
    }

    /// Like [`list_models`](Self::list_models), but an unrecognized provider
    /// string yields an empty list instead of an error.
    pub async fn list_models_for_settings(
        &self,
        settings: &ProviderSettings,
    ) -> Result<Vec<String>, GenerationError> {
        if settings.provider.parse::<ProviderKind>().is_err() {
            return Ok(Vec::new());
        }
        let config = ProviderConfig::try_from(settings)?;
        self.list_models(&config).await
    }

    pub async fn list_models_cancellable(
        &self,
        config: &ProviderConfig,
        cancel: &CancelHandle,
    ) -> Result<Vec<String>, GenerationError> {
        cancel.run(self.list_models(config)).await
    }
}

#[async_trait]
impl ModelListing for ModelDiscoveryGateway {
    async fn list_models(&self, config: &ProviderConfig) -> Result<Vec<String>, GenerationError> {
        ModelDiscoveryGateway::list_models(self, config).await
    }
}
