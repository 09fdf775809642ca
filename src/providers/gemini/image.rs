//! Gemini image generation and editing.
//!
//! Which request fields a tier unlocks is a table lookup, so building the
//! request stays a pure function of `(tier, size, aspect ratio)`.

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GeminiTool, GenerationConfig,
    ImageConfig, Part,
};
use crate::error::{GenerationError, Operation};
use crate::types::{
    AspectRatio, GeneratedImage, ImageSize, ImageTier, ModelDefaults, SourceImage,
};

/// Image model family a tier maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageModel {
    Lightweight,
    HighQuality,
}

impl ImageModel {
    pub fn name(self, defaults: &ModelDefaults) -> &str {
        match self {
            Self::Lightweight => &defaults.gemini_free_image,
            Self::HighQuality => &defaults.gemini_paid_image,
        }
    }
}

/// Capabilities a tier unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierCapabilities {
    pub model: ImageModel,
    /// Attach the requested output size.
    pub image_size: bool,
    /// Attach the search-grounding tool.
    pub search_grounding: bool,
}

const FREE: TierCapabilities = TierCapabilities {
    model: ImageModel::Lightweight,
    image_size: false,
    search_grounding: false,
};

const PAID: TierCapabilities = TierCapabilities {
    model: ImageModel::HighQuality,
    image_size: true,
    search_grounding: true,
};

pub const fn capabilities(tier: ImageTier) -> TierCapabilities {
    match tier {
        ImageTier::Free => FREE,
        ImageTier::Paid => PAID,
    }
}

/// Editing is not tier-gated and always uses the lightweight model.
pub const EDIT_MODEL: ImageModel = ImageModel::Lightweight;

pub fn build_image_request(
    prompt: &str,
    tier: ImageTier,
    size: ImageSize,
    aspect_ratio: AspectRatio,
) -> GenerateContentRequest {
    let caps = capabilities(tier);
    let image_config = ImageConfig {
        aspect_ratio: Some(aspect_ratio.as_str().to_string()),
        image_size: caps.image_size.then(|| size.as_str().to_string()),
    };

    GenerateContentRequest {
        contents: vec![Content::user(vec![Part::text(prompt)])],
        system_instruction: None,
        tools: caps
            .search_grounding
            .then(|| vec![GeminiTool::google_search()]),
        generation_config: Some(GenerationConfig {
            image_config: Some(image_config),
            ..Default::default()
        }),
    }
}

pub fn build_edit_request(prompt: &str, source: &SourceImage) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(vec![
            Part::inline_data(&source.mime_type, &source.data),
            Part::text(prompt),
        ])],
        ..Default::default()
    }
}

/// The first part of the first candidate carrying inline data is the image.
/// A text-only reply (typically a refusal) is `NoImageProduced`.
pub fn extract_image(
    response: &GenerateContentResponse,
    operation: Operation,
) -> Result<GeneratedImage, GenerationError> {
    let parts = response.first_parts();
    if let Some(blob) = parts.iter().find_map(|part| part.inline_data.as_ref()) {
        return Ok(GeneratedImage::new(blob.data.clone()));
    }

    let text = response.text();
    Err(GenerationError::NoImageProduced {
        operation,
        text: (!text.is_empty()).then_some(text),
    })
}
