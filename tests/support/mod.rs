//! Shared test transport: records every outbound request and replies with a
//! scripted response.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use studio_gateway::execution::http::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse,
};
use studio_gateway::{DefaultCredentials, GenerationError, StudioGateway};

#[derive(Clone)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<HttpTransportRequest>>>,
    response: HttpTransportResponse,
    delay: Option<Duration>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: serde_json::Value) -> Self {
        Self {
            calls: Arc::default(),
            response: HttpTransportResponse::json(status, &body),
            delay: None,
        }
    }

    pub fn ok(body: serde_json::Value) -> Self {
        Self::replying(200, body)
    }

    /// Hold every reply back by `delay`.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<HttpTransportRequest> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn single_call(&self) -> HttpTransportRequest {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one outbound request");
        calls.into_iter().next().expect("one call")
    }

    pub fn gateway(&self) -> StudioGateway {
        self.gateway_with(DefaultCredentials::none())
    }

    pub fn gateway_with(&self, credentials: DefaultCredentials) -> StudioGateway {
        StudioGateway::builder()
            .fetch(Arc::new(self.clone()))
            .credentials(credentials)
            .build()
            .expect("build gateway")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, GenerationError> {
        self.calls.lock().expect("lock").push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.response.clone())
    }
}

pub fn header<'a>(call: &'a HttpTransportRequest, name: &str) -> Option<&'a str> {
    call.headers.get(name).and_then(|v| v.to_str().ok())
}

pub fn body(call: &HttpTransportRequest) -> &serde_json::Value {
    call.body.as_ref().expect("request has a JSON body")
}
