use axum::{
    Json,
    extract::{FromRequest, Request},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::errors::ErrorResponse;

type JsonRejection = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> JsonRejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(message.into())),
    )
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// `Json<T>` for order bodies. A request that is not declared as JSON is read
/// as an empty object; a JSON body must be an object. Rejections use the
/// service's error envelope instead of axum's plain-text bodies.
pub struct OrderJson<T>(pub T);

impl<S, T> FromRequest<S> for OrderJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_json(req.headers()) {
            let Json(value) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|rejection| bad_request(rejection.body_text()))?;
            value
        } else {
            Value::Object(Map::new())
        };

        if !value.is_object() {
            return Err(bad_request("Request body must be a JSON object"));
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|e| bad_request(e.to_string()))
    }
}
