//! Utility modules for studio-gateway

pub mod cancel;
pub mod mime;

pub use cancel::{CancelHandle, new_cancel_handle};
