use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSchemaRepository = Arc<dyn SchemaRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SchemaRepositoryTrait {
    /// Creates the `orders` table if it is missing. Safe to call repeatedly.
    async fn ensure_schema(&self) -> Result<(), RepositoryError>;
}
