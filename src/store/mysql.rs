// MySQL-backed document store
//
// Every collection lives in the single `documents` table (see migrations/):
// - `seq` auto-increment gives stable insertion ordering
// - `(collection, id)` is unique
// - `body` is a native JSON column queried with JSON_EXTRACT

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, MySqlPool};
use uuid::Uuid;

use super::{now, validate_field_name, Document, DocumentStore};
use crate::core::Result;

/// Document store over a MySQL connection pool
#[derive(Clone)]
pub struct MySqlDocumentStore {
    pool: MySqlPool,
}

impl MySqlDocumentStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    body: Json<Value>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            body: row.body.0,
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
        }
    }
}

#[async_trait]
impl DocumentStore for MySqlDocumentStore {
    async fn insert(&self, collection: &str, body: Value) -> Result<Document> {
        let id = Uuid::new_v4().to_string();
        let timestamp = now();

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(collection)
        .bind(Json(&body))
        .bind(timestamp.naive_utc())
        .bind(timestamp.naive_utc())
        .execute(&self.pool)
        .await?;

        tracing::debug!(collection, id = %id, "Document inserted");

        Ok(Document {
            id,
            body,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    async fn find(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body, created_at, updated_at
            FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Document::from))
    }

    async fn list(
        &self,
        collection: &str,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Document>> {
        // MySQL has no OFFSET without LIMIT; u64::MAX stands in for "no limit"
        let limit = limit.map_or(u64::MAX, u64::from);

        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body, created_at, updated_at
            FROM documents
            WHERE collection = ?
            ORDER BY seq
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(collection)
        .bind(limit)
        .bind(u64::from(offset))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>> {
        validate_field_name(field)?;

        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body, created_at, updated_at
            FROM documents
            WHERE collection = ?
              AND JSON_UNQUOTE(JSON_EXTRACT(body, ?)) = ?
            ORDER BY seq
            "#,
        )
        .bind(collection)
        .bind(format!("$.{}", field))
        .bind(value)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn replace(&self, collection: &str, id: &str, body: Value) -> Result<Option<Document>> {
        sqlx::query(
            r#"
            UPDATE documents
            SET body = ?, updated_at = ?
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(Json(&body))
        .bind(now().naive_utc())
        .bind(collection)
        .bind(id)
        .execute(&self.pool)
        .await?;

        // rows_affected only counts changed rows, so read back instead
        self.find(collection, id).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = ?")
            .bind(collection)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
