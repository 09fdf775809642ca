//! Image payloads exchanged with the image gateway.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::GenerationError;
use crate::utils::mime::{DEFAULT_IMAGE_MIME, guess_image_mime};

/// An existing image supplied for editing or analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Base64 payload without any `data:` prefix.
    pub data: String,
    pub mime_type: String,
}

impl SourceImage {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> Result<Self, GenerationError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| GenerationError::InvalidInput("image is not a data URI".to_string()))?;
        let (header, payload) = rest.split_once(',').ok_or_else(|| {
            GenerationError::InvalidInput("data URI has no payload".to_string())
        })?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| GenerationError::InvalidInput("data URI is not base64".to_string()))?;
        if mime_type.is_empty() || payload.is_empty() {
            return Err(GenerationError::InvalidInput(
                "data URI is missing its MIME type or payload".to_string(),
            ));
        }
        Ok(Self::new(payload, mime_type))
    }

    /// Encode raw bytes, sniffing the MIME type from the content.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(STANDARD.encode(bytes), guess_image_mime(bytes, None))
    }

    /// Read an image file. The MIME type is sniffed from the bytes and
    /// falls back to a guess from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, GenerationError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            GenerationError::InvalidInput(format!("cannot read {}: {e}", path.display()))
        })?;
        let mime_type = guess_image_mime(&bytes, Some(path));
        Ok(Self::new(STANDARD.encode(&bytes), mime_type))
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// The single image extracted from a generation or edit response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Base64 payload as returned by the backend.
    pub data: String,
}

impl GeneratedImage {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Render as a PNG data URI, ready for an `<img src>`.
    pub fn data_uri(&self) -> String {
        format!("data:{DEFAULT_IMAGE_MIME};base64,{}", self.data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, GenerationError> {
        STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| GenerationError::InvalidInput(format!("invalid base64 image: {e}")))
    }

    /// Reuse this output as the input of a follow-up edit.
    pub fn into_source(self) -> SourceImage {
        SourceImage::new(self.data, DEFAULT_IMAGE_MIME)
    }
}
