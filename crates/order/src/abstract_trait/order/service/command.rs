use crate::domain::{requests::order::SubmitOrderRequest, response::api::ApiResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn submit_order(&self, req: SubmitOrderRequest) -> Result<ApiResponse, ServiceError>;
}
