use axum::routing::get;
use utoipa_axum::router::OpenApiRouter;

pub const HEALTH_MESSAGE: &str = "同學會訂餐後端已啟動！";

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    )
)]
pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

pub fn health_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/", get(health_check))
}
