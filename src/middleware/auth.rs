use axum::{extract::FromRequestParts, http::header};

use crate::{dto::auth::Claims, error::AppError, state::AppState};

/// The caller identified by a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
}

impl AuthUser {
    pub fn user_id(&self) -> i64 {
        self.claims.id
    }

    pub fn name(&self) -> &str {
        &self.claims.name
    }
}

fn missing_token() -> AppError {
    AppError::Unauthorized("Missing or malformed token".into())
}

/// Pulls the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme != "Bearer" || token.is_empty() {
        return None;
    }
    Some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(missing_token)?;

        let auth_str = auth_header.to_str().map_err(|_| missing_token())?;
        let token = bearer_token(auth_str).ok_or_else(missing_token)?;

        let claims = state.jwt.verify(token)?;
        Ok(AuthUser { claims })
    }
}

#[cfg(test)]
mod tests {
    use super::bearer_token;

    #[test]
    fn accepts_only_bearer_scheme() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("bearer abc"), None);
    }
}
