//! Runtime settings read from the environment (and `.env` via dotenvy).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    /// SQLite connection string, from `DB_URI`.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Insert sample restaurants and pizzas into an empty database at startup.
    pub seed_database: bool,
    pub body_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_database: false,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_URI")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let defaults = Settings::default();
        let bind_addr: SocketAddr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), defaults.bind_addr)?;
        let max_connections: u32 = parse_or(
            "DB_MAX_CONNECTIONS",
            lookup("DB_MAX_CONNECTIONS"),
            defaults.max_connections,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }
        let seed_database = match lookup("SEED_DATABASE") {
            Some(v) => parse_bool("SEED_DATABASE", &v)?,
            None => false,
        };
        let body_limit: usize = parse_or(
            "REQUEST_BODY_LIMIT",
            lookup("REQUEST_BODY_LIMIT"),
            defaults.body_limit,
        )?;

        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            seed_database,
            body_limit,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(v) => v
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue {
                key,
                value: v.clone(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: v.to_string(),
            reason: "expected a boolean".into(),
        }),
    }
}
