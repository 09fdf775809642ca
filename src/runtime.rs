//! Dependencies shared by all gateways.

use crate::execution::HttpExecutor;
use crate::types::{DefaultCredentials, Endpoints, ModelDefaults};

/// Immutable per-gateway wiring: the pooled transport plus configuration.
#[derive(Clone)]
pub(crate) struct GatewayRuntime {
    pub executor: HttpExecutor,
    pub endpoints: Endpoints,
    pub models: ModelDefaults,
    pub credentials: DefaultCredentials,
}
