use serde::Deserialize;
use utoipa::ToSchema;

/// Order submission body. Any `status`, `date`, `customerName` or `userId`
/// sent by the client is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub file_name: Option<String>,
    pub idea_description: Option<String>,
    pub material: Option<String>,
    pub quantity: Option<i64>,
    pub provider_id: Option<i64>,
}
