//! Prompt presets used by the studio screens.
//!
//! [`ImageStyle`] wraps a subject into an image prompt; [`Assistant`] pairs a
//! system instruction with the reasoning setting each workflow uses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::store::DocumentKind;
use crate::traits::TextGeneration;
use crate::types::{ImageRequest, ProviderConfig, ProviderKind, TextRequest};

/// Visual treatment applied to an image subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    #[default]
    Wireframe,
    Mockup,
    Logo,
    Asset,
    /// Use the prompt as is.
    Custom,
}

impl ImageStyle {
    pub const ALL: [Self; 5] = [
        Self::Wireframe,
        Self::Mockup,
        Self::Logo,
        Self::Asset,
        Self::Custom,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wireframe => "wireframe",
            Self::Mockup => "mockup",
            Self::Logo => "logo",
            Self::Asset => "asset",
            Self::Custom => "custom",
        }
    }

    pub fn apply(&self, subject: &str) -> String {
        match self {
            Self::Wireframe => format!(
                "A clean, low-fidelity UI wireframe mockup of {subject}. Black and white, simple lines, minimalist, structural layout."
            ),
            Self::Mockup => format!(
                "A high-fidelity UI mockup of {subject}. Modern, clean, dribbble style, beautiful UI/UX, vibrant colors."
            ),
            Self::Logo => format!(
                "A professional, modern logo design for {subject}. Clean vector style, flat design, isolated on white background."
            ),
            Self::Asset => format!(
                "A beautiful brand illustration or graphic asset for {subject}. Modern corporate memphis or flat vector style, vibrant colors."
            ),
            Self::Custom => subject.to_string(),
        }
    }

    /// An image request for the styled subject with default tier, size and ratio.
    pub fn request(&self, subject: &str) -> ImageRequest {
        ImageRequest::new(self.apply(subject))
    }
}

impl FromStr for ImageStyle {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GenerationError::InvalidInput(format!("unknown image style: {s}")))
    }
}

/// A text workflow: its system instruction and reasoning setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assistant {
    /// Five ideas on a topic.
    Brainstorm,
    /// A full document of the given kind from a product idea.
    DocumentWriter(DocumentKind),
    /// Brand identity in Markdown.
    BrandDesigner,
    Chat,
}

impl Assistant {
    pub fn system_instruction(&self) -> String {
        match self {
            Self::Brainstorm => "You are a creative brainstorming assistant. Generate 5 unique, innovative, and actionable ideas based on the user's topic. Format each idea as a short paragraph with a bold title.".to_string(),
            Self::DocumentWriter(kind) => format!(
                "You are an expert product manager and software architect. Generate a comprehensive {} based on the user's idea. Format the output in Markdown.",
                kind.as_str().to_uppercase()
            ),
            Self::BrandDesigner => "You are an expert UI/UX designer and brand strategist. Generate a comprehensive brand identity including logos concepts, typography, color palettes (with hex codes), illustrations style, and abstract visual patterns based on the user's app idea. Format in Markdown.".to_string(),
            Self::Chat => "You are a helpful AI assistant.".to_string(),
        }
    }

    /// Chat asks for extra reasoning only where the backend supports it.
    pub const fn reasoning_effort(&self, provider: ProviderKind) -> bool {
        match self {
            Self::Brainstorm => false,
            Self::DocumentWriter(_) | Self::BrandDesigner => true,
            Self::Chat => matches!(provider, ProviderKind::Gemini),
        }
    }

    pub fn request(&self, prompt: impl Into<String>, provider: ProviderKind) -> TextRequest {
        TextRequest::new(prompt)
            .with_system_instruction(self.system_instruction())
            .with_reasoning_effort(self.reasoning_effort(provider))
    }

    pub async fn run(
        &self,
        generator: &dyn TextGeneration,
        config: &ProviderConfig,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        generator
            .generate(config, &self.request(prompt, config.kind()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn styles_wrap_subject() {
        assert_eq!(
            ImageStyle::Logo.apply("a coffee app"),
            "A professional, modern logo design for a coffee app. Clean vector style, flat design, isolated on white background."
        );
        assert!(ImageStyle::Wireframe.apply("x").contains("low-fidelity UI wireframe mockup of x."));
        assert_eq!(ImageStyle::Custom.apply("exactly this"), "exactly this");
        assert_eq!("Mockup".parse::<ImageStyle>().unwrap(), ImageStyle::Mockup);
    }

    #[test]
    fn document_writer_names_kind_in_upper_case() {
        let instruction = Assistant::DocumentWriter(DocumentKind::Specs).system_instruction();
        assert!(instruction.contains("Generate a comprehensive SPECS based on"));
    }

    #[test]
    fn reasoning_by_workflow() {
        for provider in ProviderKind::ALL {
            assert!(!Assistant::Brainstorm.reasoning_effort(provider));
            assert!(Assistant::BrandDesigner.reasoning_effort(provider));
            assert!(Assistant::DocumentWriter(DocumentKind::Prd).reasoning_effort(provider));
        }
        assert!(Assistant::Chat.reasoning_effort(ProviderKind::Gemini));
        assert!(!Assistant::Chat.reasoning_effort(ProviderKind::Ollama));
    }

    struct Capture(Mutex<Option<TextRequest>>);

    #[async_trait]
    impl TextGeneration for Capture {
        async fn generate(
            &self,
            _config: &ProviderConfig,
            request: &TextRequest,
        ) -> Result<String, GenerationError> {
            *self.0.lock().unwrap() = Some(request.clone());
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn run_sends_preset_request() {
        let capture = Capture(Mutex::new(None));
        let out = Assistant::Chat
            .run(&capture, &ProviderConfig::openai("sk"), "hi")
            .await
            .unwrap();
        assert_eq!(out, "ok");

        let sent = capture.0.lock().unwrap().clone().unwrap();
        assert_eq!(sent.prompt, "hi");
        assert_eq!(sent.system_instruction.as_deref(), Some("You are a helpful AI assistant."));
        assert!(!sent.reasoning_effort);
    }
}
