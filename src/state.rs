use std::sync::Arc;

use crate::{auth::JwtKeys, db::DbPool};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub jwt: Arc<JwtKeys>,
}

impl AppState {
    pub fn new(pool: DbPool, jwt: JwtKeys) -> Self {
        Self {
            pool,
            jwt: Arc::new(jwt),
        }
    }
}
