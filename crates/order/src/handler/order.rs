use crate::{
    abstract_trait::order::service::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::order::SubmitOrderRequest,
        response::{api::ApiResponse, order::OrderResponse},
    },
    middleware::validate::OrderJson,
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/orders",
    tag = "Order",
    responses(
        (status = 200, description = "All orders, newest first", body = Vec<OrderResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/submit",
    tag = "Order",
    request_body = SubmitOrderRequest,
    responses(
        (status = 200, description = "Order stored", body = ApiResponse),
        (status = 400, description = "Malformed body or rejected by strict validation", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn submit_order(
    Extension(service): Extension<DynOrderCommandService>,
    OrderJson(body): OrderJson<SubmitOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.submit_order(body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/orders", get(get_orders))
        .route("/submit", post(submit_order))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.di_container.order_command.clone()))
}
