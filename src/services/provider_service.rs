use crate::{dto::providers::ProviderListing, error::AppResult, repo::providers, state::AppState};

pub async fn list_providers(state: &AppState) -> AppResult<Vec<ProviderListing>> {
    let items = providers::list_all(&state.pool)
        .await?
        .into_iter()
        .map(ProviderListing::from)
        .collect();
    Ok(items)
}
