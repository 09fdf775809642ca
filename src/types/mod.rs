//! Core value types: provider configuration, requests and results.

pub mod config;
pub mod credentials;
pub mod http;
pub mod image;
pub mod provider;
pub mod request;

pub use config::{Endpoints, ModelDefaults};
pub use credentials::DefaultCredentials;
pub use http::{HttpConfig, HttpConfigBuilder};
pub use image::{GeneratedImage, SourceImage};
pub use provider::{ProviderConfig, ProviderKind, ProviderSettings};
pub use request::{AspectRatio, ImageEditRequest, ImageRequest, ImageSize, ImageTier, TextRequest};
