use crate::{
    abstract_trait::order::{
        repository::DynOrderCommandRepository, service::OrderCommandServiceTrait,
    },
    config::ValidationMode,
    domain::{
        requests::order::{CreateOrderRecordRequest, StrictOrderRequest, SubmitOrderRequest},
        response::api::ApiResponse,
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer},
};
use tracing::{info, warn};

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    validation: ValidationMode,
    tracer: OperationTracer,
}

impl OrderCommandService {
    pub fn new(
        command: DynOrderCommandRepository,
        validation: ValidationMode,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_command_service", registry);

        Self {
            command,
            validation,
            tracer: OperationTracer::new("order-command-service", metrics),
        }
    }

    fn prepare(&self, req: SubmitOrderRequest) -> Result<CreateOrderRecordRequest, ServiceError> {
        match self.validation {
            ValidationMode::Passthrough => Ok(CreateOrderRecordRequest::from(req)),
            ValidationMode::Strict => {
                let strict =
                    StrictOrderRequest::try_from(&req).map_err(ServiceError::Validation)?;
                strict.check().map_err(ServiceError::Validation)?;
                Ok(CreateOrderRecordRequest::from(strict))
            }
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn submit_order(&self, req: SubmitOrderRequest) -> Result<ApiResponse, ServiceError> {
        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "submit_order",
            vec![KeyValue::new(
                "validation",
                format!("{:?}", self.validation).to_lowercase(),
            )],
        );

        let record = match self.prepare(req) {
            Ok(record) => record,
            Err(e) => {
                warn!("🚫 Rejected order submission: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, &e.to_string());
                return Err(e);
            }
        };

        info!("📝 Submitting order for user {:?}", record.user_name);

        match self.command.create_order(&record).await {
            Ok(id) => {
                self.tracer.complete_success(
                    &tracing_ctx,
                    method,
                    &format!("Order {id} stored"),
                );
                Ok(ApiResponse::success())
            }
            Err(e) => {
                self.tracer.complete_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to store order: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
