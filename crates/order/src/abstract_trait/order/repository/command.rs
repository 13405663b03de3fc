use crate::domain::requests::order::CreateOrderRecordRequest;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts one row and returns its generated id.
    async fn create_order(&self, req: &CreateOrderRecordRequest) -> Result<i32, RepositoryError>;
}
