use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::providers::ProviderListing,
    error::{AppResult, ErrorBody},
    services::provider_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_providers))
}

#[utoipa::path(
    get,
    path = "/api/providers",
    responses(
        (status = 200, description = "Provider directory", body = Vec<ProviderListing>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "Providers"
)]
pub async fn list_providers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProviderListing>>> {
    let items = provider_service::list_providers(&state).await?;
    Ok(Json(items))
}
