use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};

use crate::{
    dto::orders::CreateOrderRequest,
    error::{AppResult, ErrorBody},
    middleware::auth::AuthUser,
    models::Order,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = Order),
        (status = 400, description = "Missing material, quantity or providerId", body = ErrorBody),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let Json(payload) = payload?;
    let order = order_service::create_order(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
