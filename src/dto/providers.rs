use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Provider;

/// A directory entry. `printers`, `materials` and `orders` are placeholders
/// and are always empty.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderListing {
    #[serde(flatten)]
    pub provider: Provider,
    #[schema(value_type = Vec<Object>)]
    pub printers: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    pub materials: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    pub orders: Vec<serde_json::Value>,
}

impl From<Provider> for ProviderListing {
    fn from(provider: Provider) -> Self {
        Self {
            provider,
            printers: Vec::new(),
            materials: Vec::new(),
            orders: Vec::new(),
        }
    }
}
