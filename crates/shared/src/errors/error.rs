use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request: `{ "result": "error", "error": "..." }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub result: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            result: "error".into(),
            error: error.into(),
        }
    }
}
