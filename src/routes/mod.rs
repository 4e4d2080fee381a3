use axum::{Router, routing::get};

use crate::state::AppState;

pub mod auth;
pub mod doc;
pub mod health;
pub mod orders;
pub mod providers;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/me", get(auth::me))
        .nest("/providers", providers::router())
        .nest("/orders", orders::router())
}
