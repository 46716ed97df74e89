use async_trait::async_trait;

use crate::core::Result;

/// Base repository trait for CRUD operations
/// All collection repositories implement this trait for consistency
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// Update an existing entity
    async fn update(&self, id: ID, entity: T) -> Result<T>;

    /// Delete an entity by ID
    async fn delete(&self, id: ID) -> Result<()>;

    /// List all entities (with optional pagination)
    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<T>>;
}
