#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;

use print_connect::{
    app::build_app,
    auth::JwtKeys,
    db::{DbPool, create_pool, run_migrations},
    state::AppState,
};

pub const TEST_SECRET: &str = "test-secret";

pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    pub jwt: JwtKeys,
}

/// A fresh application backed by its own in-memory database.
pub async fn spawn_app() -> anyhow::Result<TestApp> {
    let pool = create_pool("sqlite::memory:", 1).await?;
    run_migrations(&pool).await?;
    let jwt = JwtKeys::new(TEST_SECRET, Duration::days(7));
    let router = build_app(AppState::new(pool.clone(), jwt.clone()));
    Ok(TestApp { router, pool, jwt })
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, body))
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> anyhow::Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty())?).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: Value,
        token: Option<&str>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(serde_json::to_vec(&body)?))?)
            .await
    }

    /// Registers a user and returns the issued token.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> anyhow::Result<String> {
        let (status, body) = self
            .post_json(
                "/api/auth/register",
                serde_json::json!({ "name": name, "email": email, "password": password }),
                None,
            )
            .await?;
        anyhow::ensure!(status == StatusCode::CREATED, "register failed: {status} {body}");
        body["token"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("no token in {body}"))
    }

    pub async fn insert_provider(&self, id: i64, name: &str, is_business: bool) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO providers (id, name, distance, rating, avatar_url, is_business, motto) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(2.5_f64)
        .bind(4.7_f64)
        .bind(None::<String>)
        .bind(is_business)
        .bind(Some("Layer by layer"))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn count(&self, table: &str) -> anyhow::Result<i64> {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT count(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
