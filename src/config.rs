use std::env;

use anyhow::{Context, bail};
use chrono::Duration;

const DEFAULT_JWT_SECRET: &str = "dev-secret";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expires_in: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://database.db".to_string());
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(5);
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3001);

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET is not set, falling back to the development secret");
                DEFAULT_JWT_SECRET.to_string()
            }
        };
        let raw_expiry = env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| "7d".to_string());
        let jwt_expires_in = parse_duration(&raw_expiry)
            .with_context(|| format!("invalid JWT_EXPIRES_IN value {raw_expiry:?}"))?;

        Ok(Self {
            database_url,
            database_max_connections,
            host,
            port,
            jwt_secret,
            jwt_expires_in,
        })
    }
}

/// Parses a token lifetime such as `7d`, `12h`, `30m`, `45s` or a bare
/// number of seconds.
pub fn parse_duration(raw: &str) -> anyhow::Result<Duration> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (amount, unit) = raw.split_at(split);
    if amount.is_empty() {
        bail!("missing amount");
    }
    let amount: i64 = amount.parse()?;
    if amount <= 0 {
        bail!("duration must be positive");
    }

    let duration = match unit.trim() {
        "" | "s" => Duration::try_seconds(amount),
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        other => bail!("unknown unit {other:?}"),
    };
    duration.context("duration out of range")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_units() {
        assert_eq!(parse_duration("7d").unwrap(), Duration::days(7));
        assert_eq!(parse_duration("12h").unwrap(), Duration::hours(12));
        assert_eq!(parse_duration("30m").unwrap(), Duration::minutes(30));
        assert_eq!(parse_duration("45s").unwrap(), Duration::seconds(45));
        assert_eq!(parse_duration("3600").unwrap(), Duration::hours(1));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("d").is_err());
        assert!(parse_duration("0d").is_err());
        assert!(parse_duration("7w").is_err());
        assert!(parse_duration("seven days").is_err());
    }
}
