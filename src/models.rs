use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status every new order starts (and stays) in.
pub const ORDER_STATUS_PENDING: &str = "In attesa";

/// A `users` row, password hash included. Never serialized.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

/// The public view of a user returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub distance: f64,
    pub rating: f64,
    pub avatar_url: Option<String>,
    pub is_business: bool,
    pub motto: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub file_name: Option<String>,
    pub idea_description: Option<String>,
    pub material: String,
    pub quantity: i64,
    pub status: String,
    pub date: String,
    pub provider_id: i64,
    pub user_id: i64,
}
