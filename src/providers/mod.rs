//! Backend implementations.
//!
//! Each module owns its wire types and request shaping; dispatch between them
//! happens in [`crate::gateway`].

pub mod gemini;
pub mod ollama;
pub mod openai_compatible;
