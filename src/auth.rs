use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::rand_core::OsRng;

use crate::{
    dto::auth::Claims,
    error::{AppError, AppResult},
    models::User,
};

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(password_hash) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::warn!(error = %err, "stored password hash is unparsable");
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// HMAC keys and lifetime used to sign session tokens.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, user: &User) -> AppResult<String> {
        self.issue_at(user, Utc::now())
    }

    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> AppResult<String> {
        let expiration = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> User {
        User {
            id: 7,
            name: "Ana".into(),
            email: "ana@x.com".into(),
            created_at: "2026-10-19T08:00:00.000Z".into(),
        }
    }

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = hash_password("longenough1").unwrap();
        let second = hash_password("longenough1").unwrap();
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
        assert!(verify_password("longenough1", &first));
        assert!(verify_password("longenough1", &second));
        assert!(!verify_password("longenough2", &first));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn issued_token_carries_user_claims() {
        let keys = JwtKeys::new("test-secret", Duration::days(7));
        let token = keys.issue(&ana()).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.id, 7);
        assert_eq!(claims.email, "ana@x.com");
        assert_eq!(claims.name, "Ana");
        assert_eq!(claims.exp - claims.iat, Duration::days(7).num_seconds());
    }

    #[test]
    fn token_is_valid_until_expiry() {
        let keys = JwtKeys::new("test-secret", Duration::days(7));
        let almost_expired = Utc::now() - Duration::days(7) + Duration::minutes(1);
        let token = keys.issue_at(&ana(), almost_expired).unwrap();
        assert!(keys.verify(&token).is_ok());

        let expired = Utc::now() - Duration::days(7) - Duration::minutes(1);
        let token = keys.issue_at(&ana(), expired).unwrap();
        assert!(matches!(keys.verify(&token), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn rejects_foreign_signature_and_garbage() {
        let keys = JwtKeys::new("test-secret", Duration::days(7));
        let other = JwtKeys::new("another-secret", Duration::days(7));
        let token = other.issue(&ana()).unwrap();
        assert!(keys.verify(&token).is_err());
        assert!(keys.verify("not.a.token").is_err());
        assert!(keys.verify("").is_err());
    }
}
