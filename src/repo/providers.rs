use crate::{db::DbPool, models::Provider};

pub async fn list_all(pool: &DbPool) -> Result<Vec<Provider>, sqlx::Error> {
    sqlx::query_as::<_, Provider>(
        "SELECT id, name, distance, rating, avatar_url, is_business, motto FROM providers ORDER BY id",
    )
    .fetch_all(pool)
    .await
}
