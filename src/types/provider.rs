//! Provider selection and per-user provider configuration.

use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// The generative-AI backends the gateway can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "openrouter")]
    OpenRouter,
    Ollama,
}

impl ProviderKind {
    pub const ALL: [Self; 4] = [Self::Gemini, Self::OpenAi, Self::OpenRouter, Self::Ollama];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::OpenRouter => "openrouter",
            Self::Ollama => "ollama",
        }
    }

    /// Display label used by settings screens.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gemini => "Google Gemini",
            Self::OpenAi => "OpenAI",
            Self::OpenRouter => "OpenRouter",
            Self::Ollama => "Ollama (Local)",
        }
    }

    /// Whether a per-user key must be present. Gemini can fall back to the
    /// injected default credentials and Ollama is unauthenticated.
    pub const fn requires_api_key(&self) -> bool {
        matches!(self, Self::OpenAi | Self::OpenRouter)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            "openrouter" => Ok(Self::OpenRouter),
            "ollama" => Ok(Self::Ollama),
            other => Err(GenerationError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// Which backend to call and with what credentials and model.
///
/// Each variant carries exactly the fields its backend needs. A `None` model
/// means "use the provider default for this request kind".
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    Gemini {
        /// Falls back to the gateway's default credentials when absent.
        api_key: Option<SecretString>,
        model: Option<String>,
    },
    OpenAi {
        api_key: SecretString,
        model: Option<String>,
    },
    OpenRouter {
        api_key: SecretString,
        model: Option<String>,
    },
    Ollama {
        model: Option<String>,
    },
}

impl ProviderConfig {
    pub fn gemini(api_key: Option<String>) -> Self {
        Self::Gemini {
            api_key: api_key.and_then(non_blank).map(SecretString::from),
            model: None,
        }
    }

    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::OpenAi {
            api_key: SecretString::from(api_key.into()),
            model: None,
        }
    }

    pub fn openrouter(api_key: impl Into<String>) -> Self {
        Self::OpenRouter {
            api_key: SecretString::from(api_key.into()),
            model: None,
        }
    }

    pub const fn ollama() -> Self {
        Self::Ollama { model: None }
    }

    /// Set the model; a blank string resets to the provider default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let value = non_blank(model.into());
        match &mut self {
            Self::Gemini { model, .. }
            | Self::OpenAi { model, .. }
            | Self::OpenRouter { model, .. }
            | Self::Ollama { model } => *model = value,
        }
        self
    }

    pub const fn kind(&self) -> ProviderKind {
        match self {
            Self::Gemini { .. } => ProviderKind::Gemini,
            Self::OpenAi { .. } => ProviderKind::OpenAi,
            Self::OpenRouter { .. } => ProviderKind::OpenRouter,
            Self::Ollama { .. } => ProviderKind::Ollama,
        }
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            Self::Gemini { model, .. }
            | Self::OpenAi { model, .. }
            | Self::OpenRouter { model, .. }
            | Self::Ollama { model } => model.as_deref(),
        }
    }
}

impl TryFrom<&ProviderSettings> for ProviderConfig {
    type Error = GenerationError;

    fn try_from(settings: &ProviderSettings) -> Result<Self, Self::Error> {
        let kind: ProviderKind = settings.provider.parse()?;
        let api_key = non_blank(settings.api_key.clone());
        let config = match kind {
            ProviderKind::Gemini => Self::Gemini {
                api_key: api_key.map(SecretString::from),
                model: None,
            },
            ProviderKind::OpenAi => Self::OpenAi {
                api_key: api_key
                    .map(SecretString::from)
                    .ok_or(GenerationError::MissingApiKey { provider: kind })?,
                model: None,
            },
            ProviderKind::OpenRouter => Self::OpenRouter {
                api_key: api_key
                    .map(SecretString::from)
                    .ok_or(GenerationError::MissingApiKey { provider: kind })?,
                model: None,
            },
            ProviderKind::Ollama => Self::Ollama { model: None },
        };
        Ok(config.with_model(settings.model.clone()))
    }
}

/// The provider record persisted per user, as stored and edited.
///
/// Unlike [`ProviderConfig`] this is unvalidated: `provider` may hold any
/// string and blank fields are allowed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: String,
}

impl ProviderSettings {
    pub fn new(
        provider: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Parse the stored provider string.
    pub fn kind(&self) -> Result<ProviderKind, GenerationError> {
        self.provider.parse()
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self::new(ProviderKind::Gemini.as_str(), "", "")
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("provider", &self.provider)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "[REDACTED]" })
            .field("model", &self.model)
            .finish()
    }
}

impl From<&ProviderConfig> for ProviderSettings {
    fn from(config: &ProviderConfig) -> Self {
        let api_key = match config {
            ProviderConfig::Gemini { api_key, .. } => api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string())
                .unwrap_or_default(),
            ProviderConfig::OpenAi { api_key, .. } | ProviderConfig::OpenRouter { api_key, .. } => {
                api_key.expose_secret().to_string()
            }
            ProviderConfig::Ollama { .. } => String::new(),
        };
        Self::new(
            config.kind().as_str(),
            api_key,
            config.model().unwrap_or_default(),
        )
    }
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_key_requirements() {
        assert_eq!(ProviderKind::Ollama.label(), "Ollama (Local)");
        assert_eq!(ProviderKind::Gemini.label(), "Google Gemini");
        let keyed: Vec<_> = ProviderKind::ALL
            .into_iter()
            .filter(ProviderKind::requires_api_key)
            .collect();
        assert_eq!(keyed, vec![ProviderKind::OpenAi, ProviderKind::OpenRouter]);
    }

    #[test]
    fn provider_kind_round_trips_through_strings() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.as_str().parse::<ProviderKind>().unwrap(), kind);
        }
        let err = "anthropic".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, GenerationError::UnsupportedProvider(p) if p == "anthropic"));
    }

    #[test]
    fn provider_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ProviderKind::OpenRouter).unwrap();
        assert_eq!(json, "\"openrouter\"");
        let kind: ProviderKind = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(kind, ProviderKind::OpenAi);
    }

    #[test]
    fn default_settings_select_gemini_with_blank_fields() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.provider, "gemini");
        let config = ProviderConfig::try_from(&settings).unwrap();
        assert!(matches!(config, ProviderConfig::Gemini { api_key: None, model: None }));
    }

    #[test]
    fn blank_model_means_provider_default() {
        let settings = ProviderSettings::new("ollama", "", "   ");
        let config = ProviderConfig::try_from(&settings).unwrap();
        assert_eq!(config.kind(), ProviderKind::Ollama);
        assert_eq!(config.model(), None);

        let config = ProviderConfig::ollama().with_model("mistral");
        assert_eq!(config.model(), Some("mistral"));
    }

    #[test]
    fn chat_completion_providers_require_a_key() {
        let err = ProviderConfig::try_from(&ProviderSettings::new("openai", "", "gpt-4o"))
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::MissingApiKey {
                provider: ProviderKind::OpenAi
            }
        ));

        let config =
            ProviderConfig::try_from(&ProviderSettings::new("openrouter", "sk-or", "")).unwrap();
        assert_eq!(config.kind(), ProviderKind::OpenRouter);
    }

    #[test]
    fn unknown_provider_string_is_rejected() {
        let err = ProviderConfig::try_from(&ProviderSettings::new("cohere", "k", "")).unwrap_err();
        assert!(matches!(err, GenerationError::UnsupportedProvider(_)));
    }

    #[test]
    fn settings_debug_redacts_key() {
        let settings = ProviderSettings::new("openai", "sk-secret", "gpt-4o");
        let debug = format!("{settings:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn settings_from_config_exposes_stored_shape() {
        let config = ProviderConfig::openai("sk-1").with_model("gpt-4o-mini");
        let settings = ProviderSettings::from(&config);
        assert_eq!(settings, ProviderSettings::new("openai", "sk-1", "gpt-4o-mini"));
    }
}
