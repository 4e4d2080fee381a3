use crate::{db::DbPool, models::Order};

#[derive(Debug)]
pub struct NewOrder<'a> {
    pub customer_name: &'a str,
    pub file_name: Option<&'a str>,
    pub idea_description: Option<&'a str>,
    pub material: &'a str,
    pub quantity: i64,
    pub status: &'a str,
    pub date: &'a str,
    pub provider_id: i64,
    pub user_id: i64,
}

/// Insert an order. Unknown provider or user ids are rejected by the
/// foreign keys.
pub async fn insert(pool: &DbPool, order: NewOrder<'_>) -> Result<Order, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders
            (customer_name, file_name, idea_description, material, quantity, status, date, provider_id, user_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(order.customer_name)
    .bind(order.file_name)
    .bind(order.idea_description)
    .bind(order.material)
    .bind(order.quantity)
    .bind(order.status)
    .bind(order.date)
    .bind(order.provider_id)
    .bind(order.user_id)
    .fetch_one(pool)
    .await
}
