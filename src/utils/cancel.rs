//! Cancellation utilities
//!
//! Caller-driven cancellation for gateway calls. Dropping the in-flight
//! future aborts the underlying HTTP request.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::GenerationError;

/// A handle that can be used to request cancellation.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Calls observing this handle resolve to
    /// [`GenerationError::Cancelled`] as soon as possible.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A handle cancelled together with this one, but which can also be
    /// cancelled on its own.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    /// Resolves once cancellation is requested.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// Run `fut` unless the handle fires first.
    pub async fn run<T, F>(&self, fut: F) -> Result<T, GenerationError>
    where
        F: Future<Output = Result<T, GenerationError>>,
    {
        if self.is_cancelled() {
            return Err(GenerationError::Cancelled);
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(GenerationError::Cancelled),
            result = fut => result,
        }
    }
}

impl From<CancellationToken> for CancelHandle {
    fn from(token: CancellationToken) -> Self {
        Self { token }
    }
}

/// Create a standalone cancel handle that can be shared across tasks.
pub fn new_cancel_handle() -> CancelHandle {
    CancelHandle::new()
}
