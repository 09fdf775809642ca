//! Text generation gateway.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::providers::openai_compatible::Flavor;
use crate::providers::{gemini, ollama, openai_compatible};
use crate::runtime::GatewayRuntime;
use crate::traits::TextGeneration;
use crate::types::{ProviderConfig, ProviderSettings, SourceImage, TextRequest};
use crate::utils::CancelHandle;

/// Routes a text request to the backend selected by a [`ProviderConfig`].
#[derive(Clone)]
pub struct TextGenerationGateway {
    runtime: Arc<GatewayRuntime>,
}

impl TextGenerationGateway {
    pub(crate) fn new(runtime: Arc<GatewayRuntime>) -> Self {
        Self { runtime }
    }

    /// Generate text.
    ///
    /// `reasoning_effort` maps to a high thinking level on Gemini and is
    /// ignored by the other backends.
    pub async fn generate(
        &self,
        config: &ProviderConfig,
        request: &TextRequest,
    ) -> Result<String, GenerationError> {
        let rt = &self.runtime;
        match config {
            ProviderConfig::Gemini { api_key, model } => {
                gemini::generate_text(rt, api_key.as_ref(), model.as_deref(), request).await
            }
            ProviderConfig::OpenAi { api_key, model } => {
                openai_compatible::generate_text(
                    rt,
                    Flavor::OpenAi,
                    api_key,
                    model.as_deref(),
                    request,
                )
                .await
            }
            ProviderConfig::OpenRouter { api_key, model } => {
                openai_compatible::generate_text(
                    rt,
                    Flavor::OpenRouter,
                    api_key,
                    model.as_deref(),
                    request,
                )
                .await
            }
            ProviderConfig::Ollama { model } => {
                ollama::generate_text(rt, model.as_deref(), request).await
            }
        }
    }

    /// Generate text from a stored settings record.
    ///
    /// An unrecognized provider fails with
    /// [`GenerationError::UnsupportedProvider`] before any network call.
    pub async fn generate_for_settings(
        &self,
        settings: &ProviderSettings,
        request: &TextRequest,
    ) -> Result<String, GenerationError> {
        let config = ProviderConfig::try_from(settings)?;
        self.generate(&config, request).await
    }

    /// Answer `prompt` about `source`. Only Gemini accepts image input; a
    /// blank prompt asks for a general analysis.
    pub async fn analyze_image(
        &self,
        config: &ProviderConfig,
        prompt: &str,
        source: &SourceImage,
    ) -> Result<String, GenerationError> {
        match config {
            ProviderConfig::Gemini { api_key, model } => {
                gemini::analyze_image(
                    &self.runtime,
                    api_key.as_ref(),
                    model.as_deref(),
                    prompt,
                    source,
                )
                .await
            }
            ProviderConfig::OpenAi { .. }
            | ProviderConfig::OpenRouter { .. }
            | ProviderConfig::Ollama { .. } => Err(GenerationError::UnsupportedCapability {
                provider: config.kind(),
                capability: "image analysis",
            }),
        }
    }

    pub async fn generate_cancellable(
        &self,
        config: &ProviderConfig,
        request: &TextRequest,
        cancel: &CancelHandle,
    ) -> Result<String, GenerationError> {
        cancel.run(self.generate(config, request)).await
    }

    pub async fn analyze_image_cancellable(
        &self,
        config: &ProviderConfig,
        prompt: &str,
        source: &SourceImage,
        cancel: &CancelHandle,
    ) -> Result<String, GenerationError> {
        cancel.run(self.analyze_image(config, prompt, source)).await
    }
}

#[async_trait]
impl TextGeneration for TextGenerationGateway {
    async fn generate(
        &self,
        config: &ProviderConfig,
        request: &TextRequest,
    ) -> Result<String, GenerationError> {
        TextGenerationGateway::generate(self, config, request).await
    }

    async fn analyze_image(
        &self,
        config: &ProviderConfig,
        prompt: &str,
        source: &SourceImage,
    ) -> Result<String, GenerationError> {
        TextGenerationGateway::analyze_image(self, config, prompt, source).await
    }
}
