//! Fallback credentials injected into the gateways.

use secrecy::{ExposeSecret, SecretString};

use super::provider::non_blank;
use crate::defaults;

/// Process-level credentials consulted when a caller leaves its key blank.
///
/// Gateways never read the environment themselves; build this once where the
/// gateway is assembled and pass it in.
#[derive(Debug, Clone, Default)]
pub struct DefaultCredentials {
    gemini_api_key: Option<SecretString>,
}

impl DefaultCredentials {
    pub fn none() -> Self {
        Self::default()
    }

    /// Read `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: std::env::var(defaults::env::GEMINI_API_KEY)
                .ok()
                .and_then(non_blank)
                .map(SecretString::from),
        }
    }

    pub fn with_gemini_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.gemini_api_key = non_blank(api_key.into()).map(SecretString::from);
        self
    }

    pub fn gemini_api_key(&self) -> Option<&SecretString> {
        self.gemini_api_key.as_ref()
    }

    /// The caller key when it is non-blank, otherwise the default key.
    pub(crate) fn resolve_gemini<'a>(
        &'a self,
        caller: Option<&'a SecretString>,
    ) -> Option<&'a SecretString> {
        caller
            .filter(|key| !key.expose_secret().trim().is_empty())
            .or(self.gemini_api_key.as_ref())
    }
}
