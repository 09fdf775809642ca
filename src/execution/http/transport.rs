//! HTTP transport abstraction.
//!
//! Every backend call goes through an injectable transport that sees the final
//! URL, headers and body. Production code uses [`ReqwestTransport`] over one
//! pooled client; tests substitute a recording fake.

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::{GenerationError, TransportReason};
use crate::execution::http::interceptor::HttpRequestContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub ctx: HttpRequestContext,
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderMap,
    /// JSON body; `None` for GET requests.
    pub body: Option<serde_json::Value>,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpTransportResponse {
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: serde_json::to_vec(body).unwrap_or_default(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Custom HTTP transport for JSON requests.
///
/// A transport reports only failures to reach the backend as errors; any
/// HTTP status, success or not, comes back as a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, GenerationError>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, GenerationError> {
        let HttpTransportRequest {
            ctx,
            method,
            url,
            headers,
            body,
        } = request;

        let builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        let builder = builder.headers(headers);
        let builder = match &body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let to_error = |e: reqwest::Error| {
            GenerationError::transport(ctx.provider, ctx.operation, transport_reason(e))
        };
        let resp = builder.send().await.map_err(to_error)?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(to_error)?.to_vec();

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}

// The URL is stripped because Gemini model listing carries the key in the query.
fn transport_reason(err: reqwest::Error) -> TransportReason {
    if err.is_timeout() {
        TransportReason::Timeout
    } else if err.is_connect() {
        TransportReason::Connect
    } else {
        TransportReason::Other(err.without_url().to_string())
    }
}
