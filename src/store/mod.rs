//! Per-user persistence collaborators.
//!
//! The gateways read a user's [`ProviderSettings`](crate::types::ProviderSettings)
//! from a [`SettingsStore`] and generated artifacts land in a
//! [`DocumentStore`]. The in-memory implementations lose their data when the
//! process stops.

mod documents;
mod settings;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use documents::{
    Document, DocumentDraft, DocumentKind, DocumentStore, DocumentSummary, InMemoryDocumentStore,
};
pub use settings::{InMemorySettingsStore, SettingsStore};

/// Identity of the signed-in user owning settings and documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
