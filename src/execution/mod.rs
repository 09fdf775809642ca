//! Request execution shared by every backend.

pub mod executor;
pub mod http;

pub use executor::HttpExecutor;
