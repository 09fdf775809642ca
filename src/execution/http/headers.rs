//! HTTP Headers Utility
//!
//! Builds the auth and content headers each backend expects.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::GenerationError;

const GOOG_API_KEY: &str = "x-goog-api-key";

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, GenerationError> {
        let auth_value = format!("Bearer {token}");
        let mut value = HeaderValue::from_str(&auth_value).map_err(|e| {
            GenerationError::Configuration(format!("Invalid API key format: {e}"))
        })?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Add a key-style auth header such as `x-goog-api-key`.
    pub fn with_api_key_header(mut self, name: &str, key: &str) -> Result<Self, GenerationError> {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            GenerationError::Configuration(format!("Invalid header name '{name}': {e}"))
        })?;
        let mut value = HeaderValue::from_str(key).map_err(|e| {
            GenerationError::Configuration(format!("Invalid API key format: {e}"))
        })?;
        value.set_sensitive(true);
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Header sets per backend.
pub struct ProviderHeaders;

impl ProviderHeaders {
    /// Gemini generateContent: key in `x-goog-api-key`.
    pub fn gemini(api_key: &str) -> Result<HeaderMap, GenerationError> {
        Ok(HttpHeaderBuilder::new()
            .with_api_key_header(GOOG_API_KEY, api_key)?
            .with_json_content_type()
            .build())
    }

    /// OpenAI-compatible chat completions and model listing.
    pub fn bearer(api_key: &str) -> Result<HeaderMap, GenerationError> {
        Ok(HttpHeaderBuilder::new()
            .with_bearer_auth(api_key)?
            .with_json_content_type()
            .build())
    }

    /// Unauthenticated JSON (local Ollama, Gemini listing with a query key).
    pub fn json() -> HeaderMap {
        HttpHeaderBuilder::new().with_json_content_type().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builder() {
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth("test-token")
            .unwrap()
            .with_json_content_type()
            .build();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-token");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn gemini_uses_goog_api_key_header() {
        let headers = ProviderHeaders::gemini("g-key").unwrap();
        assert_eq!(headers.get("x-goog-api-key").unwrap(), "g-key");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn json_headers_carry_no_auth() {
        let headers = ProviderHeaders::json();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn control_characters_in_key_are_rejected() {
        let err = ProviderHeaders::bearer("bad\nkey").unwrap_err();
        assert!(matches!(err, GenerationError::Configuration(_)));
    }
}
