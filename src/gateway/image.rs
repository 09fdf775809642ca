//! Image generation gateway.
//!
//! Image calls always target Gemini's image models, whatever text backend the
//! user has selected.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::providers::gemini;
use crate::runtime::GatewayRuntime;
use crate::traits::ImageGeneration;
use crate::types::{GeneratedImage, ImageEditRequest, ImageRequest};
use crate::utils::CancelHandle;

#[derive(Clone)]
pub struct ImageGenerationGateway {
    runtime: Arc<GatewayRuntime>,
}

impl ImageGenerationGateway {
    pub(crate) fn new(runtime: Arc<GatewayRuntime>) -> Self {
        Self { runtime }
    }

    /// Generate one image. The tier picks the model; the paid tier also
    /// sends the output size and enables search grounding.
    pub async fn generate(
        &self,
        request: &ImageRequest,
    ) -> Result<GeneratedImage, GenerationError> {
        gemini::generate_image(&self.runtime, request).await
    }

    /// Edit an existing image with the lightweight model.
    pub async fn edit(
        &self,
        request: &ImageEditRequest,
    ) -> Result<GeneratedImage, GenerationError> {
        gemini::edit_image(&self.runtime, request).await
    }

    pub async fn generate_cancellable(
        &self,
        request: &ImageRequest,
        cancel: &CancelHandle,
    ) -> Result<GeneratedImage, GenerationError> {
        cancel.run(self.generate(request)).await
    }

    pub async fn edit_cancellable(
        &self,
        request: &ImageEditRequest,
        cancel: &CancelHandle,
    ) -> Result<GeneratedImage, GenerationError> {
        cancel.run(self.edit(request)).await
    }
}

#[async_trait]
impl ImageGeneration for ImageGenerationGateway {
    async fn generate_image(
        &self,
        request: &ImageRequest,
    ) -> Result<GeneratedImage, GenerationError> {
        self.generate(request).await
    }

    async fn edit_image(
        &self,
        request: &ImageEditRequest,
    ) -> Result<GeneratedImage, GenerationError> {
        self.edit(request).await
    }
}
