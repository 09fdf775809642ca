//! # studio-gateway
//!
//! Provider gateways for an AI content studio: generate documents,
//! brainstorm ideas, chat replies and UI imagery through one of several
//! interchangeable backends.
//!
#![deny(unsafe_code)]

//! ## Backends
//!
//! - **Gemini**: text, image analysis, image generation and editing, model listing.
//! - **OpenAI** and **OpenRouter**: chat-completions text and model listing.
//! - **Ollama**: local text generation and model listing, no authentication.
//!
//! A [`ProviderConfig`] selects the backend per call and carries exactly the
//! credentials that backend needs. Image calls always go to Gemini.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use studio_gateway::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = StudioGateway::builder()
//!         .credentials(DefaultCredentials::from_env())
//!         .build()?;
//!
//!     let config = ProviderConfig::openai("sk-...");
//!     let ideas = Assistant::Brainstorm
//!         .run(gateway.text(), &config, "a habit tracker for runners")
//!         .await?;
//!     println!("{ideas}");
//!
//!     let logo = gateway
//!         .images()
//!         .generate(&ImageStyle::Logo.request("a habit tracker for runners"))
//!         .await?;
//!     println!("{}", logo.data_uri().len());
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`GenerationError`]. Discovery failures are safe to
//! swallow; generation failures should reach the user. Nothing is retried.

pub mod defaults;
pub mod error;
pub mod execution;
pub mod gateway;
pub mod prompts;
pub mod providers;
mod runtime;
pub mod store;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::{GenerationError, Operation, RequestFailure, TransportReason};
pub use gateway::{
    ImageGenerationGateway, ModelDiscoveryGateway, StudioGateway, StudioGatewayBuilder,
    TextGenerationGateway,
};
pub use prompts::{Assistant, ImageStyle};
pub use types::{
    AspectRatio, DefaultCredentials, Endpoints, GeneratedImage, HttpConfig, ImageEditRequest,
    ImageRequest, ImageSize, ImageTier, ModelDefaults, ProviderConfig, ProviderKind,
    ProviderSettings, SourceImage, TextRequest,
};
pub use utils::CancelHandle;

pub mod prelude {
    pub use crate::error::{GenerationError, Operation};
    pub use crate::execution::http::{HttpInterceptor, HttpTransport, LoggingInterceptor};
    pub use crate::gateway::{
        ImageGenerationGateway, ModelDiscoveryGateway, StudioGateway, TextGenerationGateway,
    };
    pub use crate::prompts::{Assistant, ImageStyle};
    pub use crate::store::{DocumentKind, DocumentStore, SettingsStore, UserId};
    pub use crate::traits::{ImageGeneration, ModelListing, TextGeneration};
    pub use crate::types::{
        AspectRatio, DefaultCredentials, Endpoints, GeneratedImage, HttpConfig, ImageEditRequest,
        ImageRequest, ImageSize, ImageTier, ModelDefaults, ProviderConfig, ProviderKind,
        ProviderSettings, SourceImage, TextRequest,
    };
    pub use crate::utils::CancelHandle;
}
