use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::UserId;
use crate::error::GenerationError;

/// What a generated document is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Product requirements document.
    #[default]
    Prd,
    /// Technical specifications.
    Specs,
    Design,
    /// Project plan.
    Plans,
}

impl DocumentKind {
    pub const ALL: [Self; 4] = [Self::Prd, Self::Specs, Self::Design, Self::Plans];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prd => "prd",
            Self::Specs => "specs",
            Self::Design => "design",
            Self::Plans => "plans",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Prd => "PRD (Product Requirements Document)",
            Self::Specs => "Technical Specifications",
            Self::Design => "Design Document",
            Self::Plans => "Project Plan",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GenerationError::InvalidInput(format!("unknown document kind: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub kind: DocumentKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Listing row: everything but the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: Uuid,
    pub title: String,
    pub kind: DocumentKind,
    pub created_at: DateTime<Utc>,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            title: doc.title.clone(),
            kind: doc.kind,
            created_at: doc.created_at,
        }
    }
}

/// A document to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub title: String,
    pub kind: DocumentKind,
    pub content: String,
}

impl DocumentDraft {
    pub fn new(title: impl Into<String>, kind: DocumentKind, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            content: content.into(),
        }
    }
}

/// Owner-scoped document persistence. A document belonging to another user
/// behaves exactly like a missing one.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Summaries of the owner's documents, newest first.
    async fn list(&self, owner: UserId) -> Result<Vec<DocumentSummary>, GenerationError>;

    async fn get(&self, owner: UserId, id: Uuid) -> Result<Option<Document>, GenerationError>;

    async fn create(
        &self,
        owner: UserId,
        draft: DocumentDraft,
    ) -> Result<Document, GenerationError>;

    /// Replace title and content. Returns `false` when nothing matched.
    async fn update(
        &self,
        owner: UserId,
        id: Uuid,
        title: String,
        content: String,
    ) -> Result<bool, GenerationError>;

    /// Returns `false` when nothing matched.
    async fn delete(&self, owner: UserId, id: Uuid) -> Result<bool, GenerationError>;
}

/// Documents kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, owner: UserId) -> Result<Vec<DocumentSummary>, GenerationError> {
        let documents = self.documents.read().await;
        // Reverse first so equal timestamps keep newest-inserted first.
        let mut summaries: Vec<DocumentSummary> = documents
            .iter()
            .rev()
            .filter(|doc| doc.owner == owner)
            .map(DocumentSummary::from)
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    async fn get(&self, owner: UserId, id: Uuid) -> Result<Option<Document>, GenerationError> {
        let documents = self.documents.read().await;
        let found = documents
            .iter()
            .find(|doc| doc.id == id && doc.owner == owner)
            .cloned();
        if found.is_none() {
            debug!("Document {id} not found for user {owner}");
        }
        Ok(found)
    }

    async fn create(
        &self,
        owner: UserId,
        draft: DocumentDraft,
    ) -> Result<Document, GenerationError> {
        let document = Document {
            id: Uuid::new_v4(),
            owner,
            title: draft.title,
            kind: draft.kind,
            content: draft.content,
            created_at: Utc::now(),
        };
        self.documents.write().await.push(document.clone());
        debug!(kind = %document.kind, "Document {} saved for user {owner}", document.id);
        Ok(document)
    }

    async fn update(
        &self,
        owner: UserId,
        id: Uuid,
        title: String,
        content: String,
    ) -> Result<bool, GenerationError> {
        let mut documents = self.documents.write().await;
        match documents
            .iter_mut()
            .find(|doc| doc.id == id && doc.owner == owner)
        {
            Some(doc) => {
                doc.title = title;
                doc.content = content;
                Ok(true)
            }
            None => {
                debug!("Attempted to update nonexistent document {id} for user {owner}");
                Ok(false)
            }
        }
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<bool, GenerationError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|doc| !(doc.id == id && doc.owner == owner));
        let removed = documents.len() != before;
        if !removed {
            debug!("Attempted to delete nonexistent document {id} for user {owner}");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: UserId = UserId(1);
    const BOB: UserId = UserId(2);

    #[tokio::test]
    async fn list_is_owner_scoped_and_newest_first() {
        let store = InMemoryDocumentStore::new();
        store
            .create(ALICE, DocumentDraft::new("first", DocumentKind::Prd, "a"))
            .await
            .unwrap();
        store
            .create(BOB, DocumentDraft::new("bob's", DocumentKind::Specs, "b"))
            .await
            .unwrap();
        store
            .create(ALICE, DocumentDraft::new("second", DocumentKind::Plans, "c"))
            .await
            .unwrap();

        let titles: Vec<_> = store
            .list(ALICE)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn other_users_documents_are_invisible() {
        let store = InMemoryDocumentStore::new();
        let doc = store
            .create(ALICE, DocumentDraft::new("mine", DocumentKind::Design, "body"))
            .await
            .unwrap();

        assert!(store.get(BOB, doc.id).await.unwrap().is_none());
        assert!(
            !store
                .update(BOB, doc.id, "stolen".into(), "x".into())
                .await
                .unwrap()
        );
        assert!(!store.delete(BOB, doc.id).await.unwrap());

        let kept = store.get(ALICE, doc.id).await.unwrap().unwrap();
        assert_eq!(kept.title, "mine");
    }

    #[tokio::test]
    async fn update_and_delete_by_owner() {
        let store = InMemoryDocumentStore::new();
        let doc = store
            .create(ALICE, DocumentDraft::new("draft", DocumentKind::Prd, "v1"))
            .await
            .unwrap();

        assert!(
            store
                .update(ALICE, doc.id, "final".into(), "v2".into())
                .await
                .unwrap()
        );
        let updated = store.get(ALICE, doc.id).await.unwrap().unwrap();
        assert_eq!((updated.title.as_str(), updated.content.as_str()), ("final", "v2"));
        assert_eq!(updated.kind, DocumentKind::Prd);
        assert_eq!(updated.created_at, doc.created_at);

        assert!(store.delete(ALICE, doc.id).await.unwrap());
        assert!(store.list(ALICE).await.unwrap().is_empty());
    }

    #[test]
    fn kind_parses_stored_strings() {
        assert_eq!("specs".parse::<DocumentKind>().unwrap(), DocumentKind::Specs);
        assert_eq!("PRD".parse::<DocumentKind>().unwrap(), DocumentKind::Prd);
        assert!("memo".parse::<DocumentKind>().is_err());
        assert_eq!(serde_json::to_value(DocumentKind::Plans).unwrap(), "plans");
        assert_eq!(DocumentKind::Prd.label(), "PRD (Product Requirements Document)");
        assert_eq!(DocumentKind::Plans.label(), "Project Plan");
    }
}
