//! Gemini text generation and image analysis.

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    ThinkingConfig,
};
use crate::types::{ModelDefaults, SourceImage, TextRequest};

/// Prompt used when an image is analyzed without instructions.
pub const DEFAULT_ANALYSIS_PROMPT: &str = "Analyze this image.";

/// Pick the model: caller's choice, else fast or high-effort by flag.
pub fn resolve_model<'a>(
    configured: Option<&'a str>,
    reasoning_effort: bool,
    defaults: &'a ModelDefaults,
) -> &'a str {
    match configured {
        Some(model) => model,
        None if reasoning_effort => &defaults.gemini_high_effort,
        None => &defaults.gemini_fast,
    }
}

/// Image analysis runs on the caller's model or the high-effort one; no
/// thinking config is sent.
pub fn resolve_analysis_model<'a>(
    configured: Option<&'a str>,
    defaults: &'a ModelDefaults,
) -> &'a str {
    configured.unwrap_or(&defaults.gemini_high_effort)
}

pub fn build_text_request(req: &TextRequest) -> GenerateContentRequest {
    let generation_config = req.reasoning_effort.then(|| GenerationConfig {
        thinking_config: Some(ThinkingConfig::high()),
        ..Default::default()
    });

    GenerateContentRequest {
        contents: vec![Content::user(vec![Part::text(&req.prompt)])],
        system_instruction: req.system_instruction.as_deref().map(Content::text),
        tools: None,
        generation_config,
    }
}

/// Inline image first, then the instruction.
pub fn build_analysis_request(prompt: &str, source: &SourceImage) -> GenerateContentRequest {
    let prompt = if prompt.trim().is_empty() {
        DEFAULT_ANALYSIS_PROMPT
    } else {
        prompt
    };
    GenerateContentRequest {
        contents: vec![Content::user(vec![
            Part::inline_data(&source.mime_type, &source.data),
            Part::text(prompt),
        ])],
        ..Default::default()
    }
}

pub fn extract_text(response: &GenerateContentResponse) -> String {
    response.text()
}
