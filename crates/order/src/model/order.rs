use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The slice of an `orders` row that the listing exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OrderSummary {
    pub user_name: Option<String>,
    pub main_course: Option<String>,
    pub total: Option<i32>,
    pub timestamp: Option<String>,
}
