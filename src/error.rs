//! Error handling for the generation gateways.
//!
//! A single error enum covers every gateway operation so callers can match on
//! the failure kind without knowing which backend produced it.

use std::fmt;

use thiserror::Error;

use crate::types::ProviderKind;

/// The gateway sub-operation a failure belongs to.
///
/// Callers use this to pick a degradation policy: discovery failures are
/// swallowed and defaulted, generation failures are surfaced to the end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Generation,
    ImageGeneration,
    ImageEdit,
    ModelDiscovery,
}

impl Operation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generation => "generation",
            Self::ImageGeneration => "image generation",
            Self::ImageEdit => "image edit",
            Self::ModelDiscovery => "model discovery",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportReason {
    Timeout,
    Connect,
    Other(String),
}

impl fmt::Display for TransportReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timed out"),
            Self::Connect => f.write_str("connection failed"),
            Self::Other(msg) => f.write_str(msg),
        }
    }
}

/// What went wrong with a backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The backend answered with a non-success status.
    Status { status: u16, body: String },
    /// The backend could not be reached.
    Transport(TransportReason),
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { status, body } if body.is_empty() => write!(f, "HTTP {status}"),
            Self::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            Self::Transport(reason) => write!(f, "transport error: {reason}"),
        }
    }
}

/// Errors returned by every gateway operation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The provider string is not one of the recognized backends.
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// The backend rejected the call or was unreachable.
    #[error("{provider} {operation} request failed: {failure}")]
    ProviderRequest {
        provider: ProviderKind,
        operation: Operation,
        failure: RequestFailure,
    },

    /// The backend answered successfully but returned no inline image part.
    #[error("No image generated ({operation})")]
    NoImageProduced {
        operation: Operation,
        /// Text the model returned in place of an image, if any.
        text: Option<String>,
    },

    /// The caller cancelled the call before it completed.
    #[error("Request cancelled")]
    Cancelled,

    #[error("Missing API key for {provider}")]
    MissingApiKey { provider: ProviderKind },

    #[error("{provider} does not support {capability}")]
    UnsupportedCapability {
        provider: ProviderKind,
        capability: &'static str,
    },

    /// A success response whose body could not be decoded.
    #[error("Invalid {provider} {operation} response: {message}")]
    InvalidResponse {
        provider: ProviderKind,
        operation: Operation,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A settings or document store backend failed.
    #[error("Store error: {0}")]
    Store(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl GenerationError {
    pub(crate) fn status(
        provider: ProviderKind,
        operation: Operation,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::ProviderRequest {
            provider,
            operation,
            failure: RequestFailure::Status {
                status,
                body: body.into(),
            },
        }
    }

    pub(crate) fn transport(
        provider: ProviderKind,
        operation: Operation,
        reason: TransportReason,
    ) -> Self {
        Self::ProviderRequest {
            provider,
            operation,
            failure: RequestFailure::Transport(reason),
        }
    }

    pub(crate) fn invalid_response(
        provider: ProviderKind,
        operation: Operation,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidResponse {
            provider,
            operation,
            message: message.into(),
        }
    }

    /// HTTP status of a rejected backend call.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::ProviderRequest {
                failure: RequestFailure::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }

    /// The sub-operation a provider failure was tagged with.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::ProviderRequest { operation, .. }
            | Self::InvalidResponse { operation, .. }
            | Self::NoImageProduced { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// True when a model-discovery call failed; callers should fall back to
    /// manual model entry instead of surfacing it.
    pub fn is_discovery_failure(&self) -> bool {
        self.operation() == Some(Operation::ModelDiscovery)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
