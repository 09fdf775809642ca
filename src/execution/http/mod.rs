//! HTTP Utilities
//!
//! - Header construction per backend
//! - HTTP interceptors
//! - Injectable transport

pub mod headers;
pub mod interceptor;
pub mod transport;

pub use headers::*;
pub use interceptor::*;
pub use transport::*;
