use chrono::Utc;

use crate::{
    dto::orders::CreateOrderRequest,
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{ORDER_STATUS_PENDING, Order},
    repo::orders::{self, NewOrder},
    state::AppState,
    validation::{optional_text, required_number, required_text},
};

/// Place an order on behalf of the authenticated user. The customer name and
/// user id come from the token; status and date are assigned here.
pub async fn create_order(
    state: &AppState,
    user: &AuthUser,
    payload: CreateOrderRequest,
) -> AppResult<Order> {
    let (Some(material), Some(quantity), Some(provider_id)) = (
        required_text(payload.material),
        required_number(payload.quantity),
        required_number(payload.provider_id),
    ) else {
        return Err(AppError::BadRequest(
            "material, quantity and providerId are required".into(),
        ));
    };

    let file_name = optional_text(payload.file_name);
    let idea_description = optional_text(payload.idea_description);
    let date = Utc::now().date_naive().format("%Y-%m-%d").to_string();

    let order = orders::insert(
        &state.pool,
        NewOrder {
            customer_name: user.name(),
            file_name: file_name.as_deref(),
            idea_description: idea_description.as_deref(),
            material: &material,
            quantity,
            status: ORDER_STATUS_PENDING,
            date: &date,
            provider_id,
            user_id: user.user_id(),
        },
    )
    .await?;

    tracing::info!(
        order_id = order.id,
        user_id = order.user_id,
        provider_id = order.provider_id,
        "order created"
    );
    Ok(order)
}
