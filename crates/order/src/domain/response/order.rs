use crate::model::order::OrderSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct OrderResponse {
    #[schema(example = "Alice")]
    pub user_name: Option<String>,
    #[schema(example = "Beef")]
    pub main_course: Option<String>,
    #[schema(example = 150)]
    pub total: Option<i32>,
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub timestamp: Option<String>,
}

// model to response
impl From<OrderSummary> for OrderResponse {
    fn from(value: OrderSummary) -> Self {
        OrderResponse {
            user_name: value.user_name,
            main_course: value.main_course,
            total: value.total,
            timestamp: value.timestamp,
        }
    }
}
