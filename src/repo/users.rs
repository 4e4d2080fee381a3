use crate::{db::DbPool, models::UserRecord};

#[derive(Debug)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub created_at: &'a str,
}

/// Insert a user. A taken email surfaces as a unique-violation database error.
pub async fn insert(pool: &DbPool, user: NewUser<'_>) -> Result<UserRecord, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        INSERT INTO users (name, email, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, email, password_hash, created_at
        "#,
    )
    .bind(user.name)
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.created_at)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ? LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
