use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::UserId;
use crate::error::GenerationError;
use crate::types::ProviderSettings;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// The stored record, or the default (`gemini`, no key, no model).
    async fn get_settings(&self, user: UserId) -> Result<ProviderSettings, GenerationError>;

    async fn put_settings(
        &self,
        user: UserId,
        settings: ProviderSettings,
    ) -> Result<(), GenerationError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    settings: Arc<RwLock<HashMap<UserId, ProviderSettings>>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_settings(&self, user: UserId) -> Result<ProviderSettings, GenerationError> {
        let settings = self.settings.read().await;
        match settings.get(&user) {
            Some(found) => Ok(found.clone()),
            None => {
                debug!("No settings stored for user {user}, using defaults");
                Ok(ProviderSettings::default())
            }
        }
    }

    async fn put_settings(
        &self,
        user: UserId,
        settings: ProviderSettings,
    ) -> Result<(), GenerationError> {
        debug!(provider = %settings.provider, "Settings updated for user {user}");
        self.settings.write().await.insert(user, settings);
        Ok(())
    }
}
