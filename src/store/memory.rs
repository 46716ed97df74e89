use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{now, validate_field_name, Document, DocumentStore};
use crate::core::Result;

/// A thread-safe in-memory document store.
///
/// Uses `Arc<RwLock<HashMap<collection, Vec<Document>>>>` so clones share the
/// same data. Vectors keep insertion order, matching the MySQL store's
/// ordering by sequence number.
#[derive(Default, Clone)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl InMemoryDocumentStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: &str, body: Value) -> Result<Document> {
        let timestamp = now();
        let document = Document {
            id: Uuid::new_v4().to_string(),
            body,
            created_at: timestamp,
            updated_at: timestamp,
        };

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());

        Ok(document)
    }

    async fn find(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn list(
        &self,
        collection: &str,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let take = limit.map_or(usize::MAX, |l| l as usize);
        Ok(docs
            .iter()
            .skip(offset as usize)
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>> {
        validate_field_name(field)?;

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| doc.body.get(field).and_then(Value::as_str) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn replace(&self, collection: &str, id: &str, body: Value) -> Result<Option<Document>> {
        let mut collections = self.collections.write().await;
        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
        else {
            return Ok(None);
        };

        doc.body = body;
        doc.updated_at = now();
        Ok(Some(doc.clone()))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };

        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        Ok(docs.len() < before)
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
