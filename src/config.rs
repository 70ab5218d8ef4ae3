use std::str::FromStr;

use anyhow::{bail, Context};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Longest session lifetime accepted from the environment: one year.
pub const MAX_TTL_MINUTES: i64 = 365 * 24 * 60;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

/// Where the Postgres connection comes from: a full URL, or discrete parts.
#[derive(Debug, Clone)]
pub enum DatabaseConfig {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: Option<String>,
        name: String,
        ssl_mode: String,
    },
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        match self {
            DatabaseConfig::Url(url) => {
                PgConnectOptions::from_str(url).context("parse DATABASE_URL")
            }
            DatabaseConfig::Parts {
                host,
                port,
                user,
                password,
                name,
                ssl_mode,
            } => {
                let ssl_mode = PgSslMode::from_str(ssl_mode)
                    .with_context(|| format!("invalid DB_SSLMODE `{ssl_mode}`"))?;
                let mut opts = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(name)
                    .ssl_mode(ssl_mode);
                if let Some(password) = password {
                    opts = opts.password(password);
                }
                Ok(opts)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub max_connections: u32,
    pub jwt: JwtConfig,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Required, no default signing secret.
        let secret = get("JWT_SECRET").context("JWT_SECRET must be set")?;
        let jwt = JwtConfig {
            secret,
            ttl_minutes: parse_or(get("JWT_TTL_MINUTES"), "JWT_TTL_MINUTES", 60)?,
        };
        if jwt.ttl_minutes <= 0 {
            bail!("JWT_TTL_MINUTES must be positive");
        }
        if jwt.ttl_minutes > MAX_TTL_MINUTES {
            bail!("JWT_TTL_MINUTES must be at most {MAX_TTL_MINUTES}");
        }

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseConfig::Url(url),
            None => DatabaseConfig::Parts {
                host: get("DB_HOST").unwrap_or_else(|| "localhost".into()),
                port: parse_or(get("DB_PORT"), "DB_PORT", 5432)?,
                user: get("DB_USER").context("DATABASE_URL or DB_USER must be set")?,
                password: get("DB_PASSWORD"),
                name: get("DB_NAME").context("DATABASE_URL or DB_NAME must be set")?,
                ssl_mode: get("DB_SSLMODE").unwrap_or_else(|| "prefer".into()),
            },
        };

        Ok(Self {
            database,
            max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 10)?,
            jwt,
            host: get("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(get("APP_PORT"), "APP_PORT", 4000)?,
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}")),
        None => Ok(default),
    }
}
