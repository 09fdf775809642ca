//! Per-call request values for text and image generation.

use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::image::SourceImage;
use crate::error::GenerationError;

/// A single text generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRequest {
    pub prompt: String,
    /// Steering text. Sent on a dedicated channel where the backend has one.
    pub system_instruction: Option<String>,
    /// Ask for the provider's highest-effort mode. Only Gemini honors it.
    pub reasoning_effort: bool,
}

impl TextRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        let instruction = instruction.into();
        self.system_instruction = (!instruction.is_empty()).then_some(instruction);
        self
    }

    pub const fn with_reasoning_effort(mut self, enabled: bool) -> Self {
        self.reasoning_effort = enabled;
        self
    }
}

/// Image-generation capability level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageTier {
    #[default]
    Free,
    Paid,
}

impl ImageTier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Paid => "paid",
        }
    }
}

impl FromStr for ImageTier {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "paid" => Ok(Self::Paid),
            other => Err(GenerationError::InvalidInput(format!(
                "unknown image tier '{other}'"
            ))),
        }
    }
}

/// Output resolution. Only honored on the paid tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub const ALL: [Self; 3] = [Self::OneK, Self::TwoK, Self::FourK];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GenerationError::InvalidInput(format!("unknown image size '{s}'")))
    }
}

/// Output aspect ratio. Always honored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    Portrait3x4,
    #[serde(rename = "4:3")]
    Landscape4x3,
    #[serde(rename = "9:16")]
    Portrait9x16,
    #[serde(rename = "16:9")]
    Landscape16x9,
}

impl AspectRatio {
    pub const ALL: [Self; 5] = [
        Self::Square,
        Self::Portrait3x4,
        Self::Landscape4x3,
        Self::Portrait9x16,
        Self::Landscape16x9,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait3x4 => "3:4",
            Self::Landscape4x3 => "4:3",
            Self::Portrait9x16 => "9:16",
            Self::Landscape16x9 => "16:9",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == s.trim())
            .ok_or_else(|| GenerationError::InvalidInput(format!("unknown aspect ratio '{s}'")))
    }
}

/// Create an image from a text description.
#[derive(Debug, Clone, Default)]
pub struct ImageRequest {
    pub prompt: String,
    pub tier: ImageTier,
    pub size: ImageSize,
    pub aspect_ratio: AspectRatio,
    /// Caller key; the gateway's default credentials are used when absent.
    pub api_key: Option<SecretString>,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub const fn with_tier(mut self, tier: ImageTier) -> Self {
        self.tier = tier;
        self
    }

    pub const fn with_size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    pub const fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = super::provider::non_blank(api_key.into()).map(SecretString::from);
        self
    }
}

/// Transform an existing image according to an instruction.
#[derive(Debug, Clone)]
pub struct ImageEditRequest {
    pub prompt: String,
    pub source: SourceImage,
    pub api_key: Option<SecretString>,
}

impl ImageEditRequest {
    pub fn new(prompt: impl Into<String>, source: SourceImage) -> Self {
        Self {
            prompt: prompt.into(),
            source,
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = super::provider::non_blank(api_key.into()).map(SecretString::from);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_ratio_parse_from_wire_strings() {
        assert_eq!("2K".parse::<ImageSize>().unwrap(), ImageSize::TwoK);
        assert_eq!("4k".parse::<ImageSize>().unwrap(), ImageSize::FourK);
        assert_eq!("16:9".parse::<AspectRatio>().unwrap(), AspectRatio::Landscape16x9);
        assert!("8K".parse::<ImageSize>().is_err());
        assert!("2:1".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn ratio_serializes_as_ratio_string() {
        let json = serde_json::to_string(&AspectRatio::Portrait9x16).unwrap();
        assert_eq!(json, "\"9:16\"");
        let tier: ImageTier = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(tier, ImageTier::Paid);
    }

    #[test]
    fn empty_system_instruction_is_dropped() {
        let req = TextRequest::new("hi").with_system_instruction("");
        assert_eq!(req.system_instruction, None);
        let req = TextRequest::new("hi")
            .with_system_instruction("be brief")
            .with_reasoning_effort(true);
        assert_eq!(req.system_instruction.as_deref(), Some("be brief"));
        assert!(req.reasoning_effort);
    }

    #[test]
    fn image_request_defaults_match_free_square_1k() {
        let req = ImageRequest::new("a cat");
        assert_eq!(req.tier, ImageTier::Free);
        assert_eq!(req.size, ImageSize::OneK);
        assert_eq!(req.aspect_ratio, AspectRatio::Square);
        assert!(req.api_key.is_none());
        assert!(ImageRequest::new("x").with_api_key(" ").api_key.is_none());
    }
}
