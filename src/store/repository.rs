use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{Document, DocumentStore};
use crate::core::traits::Repository;
use crate::core::{AppError, Result};

/// Keys owned by the store; never persisted inside a document body
const METADATA_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// A model persisted as a document in a named collection
pub trait StoredDocument: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name in the document store
    const COLLECTION: &'static str;

    /// Human-readable name used in error messages
    const KIND: &'static str;

    /// Copy the store-managed metadata onto a decoded model
    fn assign_metadata(&mut self, id: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);
}

/// Typed CRUD over one collection of a [`DocumentStore`]
pub struct DocumentRepository<T> {
    store: Arc<dyn DocumentStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for DocumentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: StoredDocument> DocumentRepository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Documents whose top-level string `field` equals `value`
    pub async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<T>> {
        let documents = self.store.find_by_field(T::COLLECTION, field, value).await?;
        Ok(Self::decode_all(documents))
    }

    pub async fn count(&self) -> Result<u64> {
        self.store.count(T::COLLECTION).await
    }

    fn encode(entity: &T) -> Result<Value> {
        let mut body = serde_json::to_value(entity)?;
        if let Value::Object(fields) = &mut body {
            for key in METADATA_FIELDS {
                fields.remove(key);
            }
        }
        Ok(body)
    }

    /// Decode a batch, leaving out documents that do not decode
    ///
    /// One malformed document must not hide the rest of a listing;
    /// `decode` has already logged it.
    fn decode_all(documents: Vec<Document>) -> Vec<T> {
        documents
            .into_iter()
            .filter_map(|document| Self::decode(document).ok())
            .collect()
    }

    fn decode(document: Document) -> Result<T> {
        let Document {
            id,
            body,
            created_at,
            updated_at,
        } = document;

        let mut entity: T = serde_json::from_value(body).map_err(|e| {
            tracing::error!(
                collection = T::COLLECTION,
                id = %id,
                "Stored document does not decode: {}",
                e
            );
            AppError::internal(format!(
                "Malformed {} document {}: {}",
                T::COLLECTION,
                id,
                e
            ))
        })?;

        entity.assign_metadata(id, created_at, updated_at);
        Ok(entity)
    }
}

#[async_trait]
impl<T: StoredDocument> Repository<T, String> for DocumentRepository<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let body = Self::encode(&entity)?;
        let document = self.store.insert(T::COLLECTION, body).await?;
        Self::decode(document)
    }

    async fn find_by_id(&self, id: String) -> Result<Option<T>> {
        self.store
            .find(T::COLLECTION, &id)
            .await?
            .map(Self::decode)
            .transpose()
    }

    async fn update(&self, id: String, entity: T) -> Result<T> {
        let body = Self::encode(&entity)?;
        let document = self
            .store
            .replace(T::COLLECTION, &id, body)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} {}", T::KIND, id)))?;
        Self::decode(document)
    }

    async fn delete(&self, id: String) -> Result<()> {
        if self.store.delete(T::COLLECTION, &id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("{} {}", T::KIND, id)))
        }
    }

    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<T>> {
        let documents = self
            .store
            .list(T::COLLECTION, limit, offset.unwrap_or(0))
            .await?;
        Ok(Self::decode_all(documents))
    }
}
