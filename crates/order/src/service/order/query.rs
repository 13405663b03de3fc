use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::response::order::OrderResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer},
};

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    tracer: OperationTracer,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_query_service", registry);

        Self {
            query,
            tracer: OperationTracer::new("order-query-service", metrics),
        }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start("find_all", vec![]);

        match self.query.find_all().await {
            Ok(orders) => {
                self.tracer.complete_success(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Found {} orders", orders.len()),
                );
                Ok(orders.into_iter().map(OrderResponse::from).collect())
            }
            Err(e) => {
                self.tracer.complete_error(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Failed to find orders: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
