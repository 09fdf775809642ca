//! Image generation capability trait

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::types::{GeneratedImage, ImageEditRequest, ImageRequest};

#[async_trait]
pub trait ImageGeneration: Send + Sync {
    async fn generate_image(&self, request: &ImageRequest)
    -> Result<GeneratedImage, GenerationError>;

    async fn edit_image(&self, request: &ImageEditRequest)
    -> Result<GeneratedImage, GenerationError>;
}
