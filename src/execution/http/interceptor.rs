//! HTTP Interceptor interfaces
//!
//! Interceptors observe outbound requests, their responses and failures. The
//! hooks are best-effort and should avoid expensive work.

use reqwest::header::HeaderMap;

use crate::error::{GenerationError, Operation};
use crate::execution::http::transport::HttpTransportResponse;
use crate::types::ProviderKind;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub request_id: String,
    pub provider: ProviderKind,
    pub operation: Operation,
    /// Request URL with the query string removed.
    pub url: String,
}

impl HttpRequestContext {
    pub fn new(provider: ProviderKind, operation: Operation, url: &str) -> Self {
        Self {
            request_id: generate_request_id(),
            provider,
            operation,
            url: strip_query(url).to_string(),
        }
    }
}

/// Generate a request id for correlating interceptor events.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Interceptors may add headers, or
    /// return an error to short-circuit the request.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        _headers: &mut HeaderMap,
        _body: Option<&serde_json::Value>,
    ) -> Result<(), GenerationError> {
        Ok(())
    }

    /// Called after a response is received (only for successful responses).
    fn on_response(&self, _ctx: &HttpRequestContext, _response: &HttpTransportResponse) {}

    /// Called when an error occurs during sending or classification.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &GenerationError) {}
}

/// A simple logging interceptor backed by `tracing` (no sensitive data).
#[derive(Clone, Debug, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        _headers: &mut HeaderMap,
        _body: Option<&serde_json::Value>,
    ) -> Result<(), GenerationError> {
        tracing::debug!(target: "studio_gateway::http", request_id=%ctx.request_id, provider=%ctx.provider, operation=%ctx.operation, url=%ctx.url, "sending request");
        Ok(())
    }

    fn on_response(&self, ctx: &HttpRequestContext, response: &HttpTransportResponse) {
        tracing::debug!(target: "studio_gateway::http", request_id=%ctx.request_id, provider=%ctx.provider, url=%ctx.url, status=%response.status, "response received");
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &GenerationError) {
        tracing::debug!(target: "studio_gateway::http", request_id=%ctx.request_id, provider=%ctx.provider, operation=%ctx.operation, url=%ctx.url, err=%error, "request error");
    }
}
