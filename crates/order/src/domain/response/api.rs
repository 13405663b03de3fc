use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{ "result": "success" }`
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    #[schema(example = "success")]
    pub result: String,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}
