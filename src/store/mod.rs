//! Document persistence
//!
//! Records are kept as schemaless JSON documents grouped into named
//! collections (`students`, `courses`, `payments`). The [`DocumentStore`]
//! trait is the only seam the rest of the application sees; a MySQL-backed
//! implementation serves production and an in-memory one serves tests and
//! local runs.

pub mod memory;
pub mod mysql;
pub mod repository;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use serde_json::Value;

use crate::core::{AppError, Result};

pub use memory::InMemoryDocumentStore;
pub use mysql::MySqlDocumentStore;
pub use repository::{DocumentRepository, StoredDocument};

/// A stored document with its store-managed metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub body: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage operations over named document collections
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document; the store assigns id and timestamps
    async fn insert(&self, collection: &str, body: Value) -> Result<Document>;

    /// Find a document by id
    async fn find(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// List documents in insertion order
    async fn list(&self, collection: &str, limit: Option<u32>, offset: u32)
        -> Result<Vec<Document>>;

    /// List documents whose top-level string field equals `value`
    async fn find_by_field(&self, collection: &str, field: &str, value: &str)
        -> Result<Vec<Document>>;

    /// Replace the body of an existing document; `None` if it does not exist
    async fn replace(&self, collection: &str, id: &str, body: Value) -> Result<Option<Document>>;

    /// Delete a document; `false` if it did not exist
    async fn delete(&self, collection: &str, id: &str) -> Result<bool>;

    /// Number of documents in a collection
    async fn count(&self, collection: &str) -> Result<u64>;

    /// Connectivity check for readiness probes
    async fn ping(&self) -> Result<()>;
}

/// Current time at the precision the MySQL `DATETIME(6)` columns keep
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Field names reach JSON paths in SQL, so only plain identifiers pass
pub(crate) fn validate_field_name(field: &str) -> Result<()> {
    let valid = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(AppError::validation(format!("Invalid field name '{}'", field)))
    }
}
