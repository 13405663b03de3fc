use crate::model::order::OrderSummary;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Every order, most recently inserted first.
    async fn find_all(&self) -> Result<Vec<OrderSummary>, RepositoryError>;
}
