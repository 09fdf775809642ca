//! Shared request execution: transport call, interceptor notification and
//! status/JSON normalization.

use std::sync::Arc;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::{GenerationError, Operation};
use crate::execution::http::interceptor::{HttpInterceptor, HttpRequestContext};
use crate::execution::http::transport::{HttpMethod, HttpTransport, HttpTransportRequest};
use crate::types::ProviderKind;

/// Longest error body kept on a status failure.
const MAX_ERROR_BODY: usize = 2048;

/// Executes one JSON request against a backend and decodes the reply.
#[derive(Clone)]
pub struct HttpExecutor {
    transport: Arc<dyn HttpTransport>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl HttpExecutor {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            interceptors: Vec::new(),
        }
    }

    pub fn with_interceptors(mut self, interceptors: Vec<Arc<dyn HttpInterceptor>>) -> Self {
        self.interceptors = interceptors;
        self
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        provider: ProviderKind,
        operation: Operation,
        url: String,
        headers: HeaderMap,
        body: serde_json::Value,
    ) -> Result<T, GenerationError> {
        self.execute(provider, operation, HttpMethod::Post, url, headers, Some(body))
            .await
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        provider: ProviderKind,
        operation: Operation,
        url: String,
        headers: HeaderMap,
    ) -> Result<T, GenerationError> {
        self.execute(provider, operation, HttpMethod::Get, url, headers, None)
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        provider: ProviderKind,
        operation: Operation,
        method: HttpMethod,
        url: String,
        mut headers: HeaderMap,
        body: Option<serde_json::Value>,
    ) -> Result<T, GenerationError> {
        let ctx = HttpRequestContext::new(provider, operation, &url);
        for it in &self.interceptors {
            it.on_before_send(&ctx, &mut headers, body.as_ref())?;
        }

        let request = HttpTransportRequest {
            ctx: ctx.clone(),
            method,
            url,
            headers,
            body,
        };
        let response = match self.transport.execute_json(request).await {
            Ok(response) => response,
            Err(error) => return Err(self.notify_error(&ctx, error)),
        };

        if !response.is_success() {
            let text = String::from_utf8_lossy(&response.body);
            let error =
                GenerationError::status(provider, operation, response.status, truncate(&text));
            return Err(self.notify_error(&ctx, error));
        }
        for it in &self.interceptors {
            it.on_response(&ctx, &response);
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            let error = GenerationError::invalid_response(provider, operation, e.to_string());
            self.notify_error(&ctx, error)
        })
    }

    fn notify_error(&self, ctx: &HttpRequestContext, error: GenerationError) -> GenerationError {
        for it in &self.interceptors {
            it.on_error(ctx, &error);
        }
        error
    }
}

fn truncate(text: &str) -> String {
    let text = text.trim();
    if text.len() <= MAX_ERROR_BODY {
        return text.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestFailure;
    use crate::execution::http::transport::HttpTransportResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedTransport(HttpTransportResponse);

    #[async_trait]
    impl HttpTransport for FixedTransport {
        async fn execute_json(
            &self,
            _request: HttpTransportRequest,
        ) -> Result<HttpTransportResponse, GenerationError> {
            Ok(self.0.clone())
        }
    }

    struct FlagInterceptor(Arc<Mutex<Vec<&'static str>>>);

    impl HttpInterceptor for FlagInterceptor {
        fn on_response(&self, _ctx: &HttpRequestContext, _response: &HttpTransportResponse) {
            self.0.lock().unwrap().push("response");
        }
        fn on_error(&self, _ctx: &HttpRequestContext, _error: &GenerationError) {
            self.0.lock().unwrap().push("error");
        }
    }

    fn executor(response: HttpTransportResponse) -> (HttpExecutor, Arc<Mutex<Vec<&'static str>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let it: Arc<dyn HttpInterceptor> = Arc::new(FlagInterceptor(events.clone()));
        let exec =
            HttpExecutor::new(Arc::new(FixedTransport(response))).with_interceptors(vec![it]);
        (exec, events)
    }

    #[tokio::test]
    async fn non_success_status_becomes_provider_request_error() {
        let (exec, events) = executor(HttpTransportResponse {
            status: 401,
            headers: HeaderMap::new(),
            body: b"{\"error\":\"bad key\"}".to_vec(),
        });

        let err = exec
            .get_json::<serde_json::Value>(
                ProviderKind::OpenAi,
                Operation::ModelDiscovery,
                "https://api.test/models".to_string(),
                HeaderMap::new(),
            )
            .await
            .unwrap_err();

        match err {
            GenerationError::ProviderRequest {
                provider: ProviderKind::OpenAi,
                operation: Operation::ModelDiscovery,
                failure: RequestFailure::Status { status: 401, body },
            } => assert!(body.contains("bad key")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(*events.lock().unwrap(), vec!["error"]);
    }

    #[tokio::test]
    async fn undecodable_success_body_is_invalid_response() {
        let (exec, events) = executor(HttpTransportResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: b"<html>".to_vec(),
        });

        let err = exec
            .post_json::<serde_json::Value>(
                ProviderKind::Ollama,
                Operation::Generation,
                "http://localhost/api/generate".to_string(),
                HeaderMap::new(),
                serde_json::json!({}),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::InvalidResponse { .. }));
        assert_eq!(*events.lock().unwrap(), vec!["response", "error"]);
    }

    #[test]
    fn long_error_bodies_are_truncated_on_char_boundary() {
        let body = "é".repeat(MAX_ERROR_BODY);
        let out = truncate(&body);
        assert!(out.ends_with("..."));
        assert!(out.len() <= MAX_ERROR_BODY + 3);
    }
}
