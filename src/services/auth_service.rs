use chrono::{SecondsFormat, Utc};

use crate::{
    auth::{hash_password, verify_password},
    dto::auth::{AuthResponse, LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    models::User,
    repo::users::{self, NewUser},
    state::AppState,
    validation::{required_secret, required_text},
};

pub const MIN_PASSWORD_LEN: usize = 8;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn register_user(state: &AppState, payload: RegisterRequest) -> AppResult<AuthResponse> {
    let (Some(name), Some(email), Some(password)) = (
        required_text(payload.name),
        required_text(payload.email),
        required_secret(payload.password),
    ) else {
        return Err(AppError::BadRequest(
            "name, email and password are required".into(),
        ));
    };

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    let email = email.to_lowercase();
    let password_hash = hash_password(&password)?;
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let record = users::insert(
        &state.pool,
        NewUser {
            name: &name,
            email: &email,
            password_hash: &password_hash,
            created_at: &created_at,
        },
    )
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Email already registered".into())
        }
        other => AppError::Db(other),
    })?;

    let user = User::from(record);
    let token = state.jwt.issue(&user)?;
    tracing::info!(user_id = user.id, "user registered");

    Ok(AuthResponse { user, token })
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<AuthResponse> {
    let (Some(email), Some(password)) = (
        required_text(payload.email),
        required_secret(payload.password),
    ) else {
        return Err(AppError::BadRequest("email and password are required".into()));
    };

    let record = users::find_by_email(&state.pool, &email.to_lowercase())
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    if !verify_password(&password, &record.password_hash) {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let user = User::from(record);
    let token = state.jwt.issue(&user)?;
    tracing::info!(user_id = user.id, "user logged in");

    Ok(AuthResponse { user, token })
}
