//! Text generation capability trait

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::types::{ProviderConfig, SourceImage, TextRequest};

#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Generate text with the backend `config` selects.
    async fn generate(
        &self,
        config: &ProviderConfig,
        request: &TextRequest,
    ) -> Result<String, GenerationError>;

    /// Describe or answer questions about an image.
    async fn analyze_image(
        &self,
        config: &ProviderConfig,
        _prompt: &str,
        _source: &SourceImage,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::UnsupportedCapability {
            provider: config.kind(),
            capability: "image analysis",
        })
    }
}
