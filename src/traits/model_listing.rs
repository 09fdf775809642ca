//! Model listing capability trait

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::types::ProviderConfig;

#[async_trait]
pub trait ModelListing: Send + Sync {
    /// Model identifiers offered by the backend, in backend order.
    /// The configured model, if any, is ignored.
    async fn list_models(&self, config: &ProviderConfig) -> Result<Vec<String>, GenerationError>;

    async fn is_model_available(
        &self,
        config: &ProviderConfig,
        model_id: &str,
    ) -> Result<bool, GenerationError> {
        Ok(self.list_models(config).await?.iter().any(|m| m == model_id))
    }
}
