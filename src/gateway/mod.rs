//! Gateways and the [`StudioGateway`] facade.
//!
//! All three gateways built by one [`StudioGatewayBuilder`] share a single
//! transport, so concurrent calls reuse the same connection pool.

mod discovery;
mod image;
mod text;

use std::sync::Arc;

pub use discovery::ModelDiscoveryGateway;
pub use image::ImageGenerationGateway;
pub use text::TextGenerationGateway;

use crate::error::GenerationError;
use crate::execution::HttpExecutor;
use crate::execution::http::{HttpInterceptor, HttpTransport, LoggingInterceptor, ReqwestTransport};
use crate::runtime::GatewayRuntime;
use crate::types::{DefaultCredentials, Endpoints, HttpConfig, ModelDefaults};

/// Entry point bundling the text, image and model-discovery gateways.
///
/// ```rust,no_run
/// use studio_gateway::{DefaultCredentials, ProviderConfig, StudioGateway, TextRequest};
///
/// # async fn demo() -> Result<(), studio_gateway::GenerationError> {
/// let gateway = StudioGateway::builder()
///     .credentials(DefaultCredentials::from_env())
///     .build()?;
///
/// let text = gateway
///     .text()
///     .generate(&ProviderConfig::ollama(), &TextRequest::new("hello"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StudioGateway {
    text: TextGenerationGateway,
    images: ImageGenerationGateway,
    models: ModelDiscoveryGateway,
}

impl StudioGateway {
    pub fn builder() -> StudioGatewayBuilder {
        StudioGatewayBuilder::new()
    }

    pub fn text(&self) -> &TextGenerationGateway {
        &self.text
    }

    pub fn images(&self) -> &ImageGenerationGateway {
        &self.images
    }

    pub fn models(&self) -> &ModelDiscoveryGateway {
        &self.models
    }
}

/// Builder for [`StudioGateway`].
#[derive(Default)]
pub struct StudioGatewayBuilder {
    http_config: HttpConfig,
    http_client: Option<reqwest::Client>,
    http_transport: Option<Arc<dyn HttpTransport>>,
    http_interceptors: Vec<Arc<dyn HttpInterceptor>>,
    http_debug: bool,
    endpoints: Endpoints,
    models: ModelDefaults,
    credentials: DefaultCredentials,
}

impl StudioGatewayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeouts, proxy and default headers for the pooled client.
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.http_config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.http_config.connect_timeout = Some(timeout);
        self
    }

    /// Use an existing client instead of building one from the HTTP config.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the network layer entirely, e.g. with a recording fake.
    pub fn with_http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http_transport = Some(transport);
        self
    }

    /// Alias for `with_http_transport(...)`.
    pub fn fetch(self, transport: Arc<dyn HttpTransport>) -> Self {
        self.with_http_transport(transport)
    }

    pub fn with_http_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.http_interceptors.push(interceptor);
        self
    }

    /// Enable a built-in logging interceptor for HTTP debugging (no sensitive data).
    pub fn http_debug(mut self, enabled: bool) -> Self {
        self.http_debug = enabled;
        self
    }

    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Send every backend to `base_url`; handy against a local mock server.
    pub fn base_url(self, base_url: impl Into<String>) -> Self {
        self.endpoints(Endpoints::all(base_url))
    }

    pub fn model_defaults(mut self, models: ModelDefaults) -> Self {
        self.models = models;
        self
    }

    pub fn credentials(mut self, credentials: DefaultCredentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn build(self) -> Result<StudioGateway, GenerationError> {
        let transport: Arc<dyn HttpTransport> = match (self.http_transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => Arc::new(ReqwestTransport::new(self.http_config.build_client()?)),
        };

        let mut interceptors = self.http_interceptors;
        if self.http_debug {
            interceptors.push(Arc::new(LoggingInterceptor));
        }

        let runtime = Arc::new(GatewayRuntime {
            executor: HttpExecutor::new(transport).with_interceptors(interceptors),
            endpoints: self.endpoints,
            models: self.models,
            credentials: self.credentials,
        });

        Ok(StudioGateway {
            text: TextGenerationGateway::new(runtime.clone()),
            images: ImageGenerationGateway::new(runtime.clone()),
            models: ModelDiscoveryGateway::new(runtime),
        })
    }
}
