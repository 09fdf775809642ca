//! Capability traits
//!
//! The gateways implement these so callers can depend on a capability
//! rather than a concrete gateway, and substitute fakes in tests.

mod image_generation;
mod model_listing;
mod text_generation;

pub use image_generation::ImageGeneration;
pub use model_listing::ModelListing;
pub use text_generation::TextGeneration;
