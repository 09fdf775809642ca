//! Default endpoints, model names and HTTP settings.

/// HTTP defaults shared by every backend.
pub mod http {
    use std::time::Duration;

    /// Whole-request timeout applied to every outbound call.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const USER_AGENT: &str = concat!("studio-gateway/", env!("CARGO_PKG_VERSION"));
}

/// Base URLs for each backend.
pub mod endpoints {
    pub const GEMINI: &str = "https://generativelanguage.googleapis.com/v1beta";
    pub const OPENAI: &str = "https://api.openai.com/v1";
    pub const OPENROUTER: &str = "https://openrouter.ai/api/v1";
    pub const OLLAMA: &str = "http://localhost:11434";
}

/// Model identifiers used when the caller leaves `model` blank.
pub mod models {
    pub const GEMINI_FAST: &str = "gemini-3-flash-preview";
    pub const GEMINI_HIGH_EFFORT: &str = "gemini-3.1-pro-preview";
    pub const GEMINI_FREE_IMAGE: &str = "gemini-2.5-flash-image";
    pub const GEMINI_PAID_IMAGE: &str = "gemini-3-pro-image-preview";
    pub const OPENAI_CHAT: &str = "gpt-4o";
    pub const OPENROUTER_CHAT: &str = "anthropic/claude-3-opus";
    pub const OLLAMA: &str = "llama3";
}

/// Environment variables read by the explicit `from_env` constructors.
pub mod env {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
}
