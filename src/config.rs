//! Process-wide configuration, read once from the environment at startup.

use std::env;
use std::fmt;
use std::path::PathBuf;

use tracing::warn;

use crate::error::{Result, ServerError};

/// Placeholder secret shipped for development. Production refuses to start
/// with this value.
pub const DEFAULT_SECRET: &str = "dev-key-please-change-in-production";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Testing,
    Production,
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppEnv::Development => "development",
            AppEnv::Testing => "testing",
            AppEnv::Production => "production",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub secret_key: String,
    /// Directory holding the database file, backups and the health probe.
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
    /// Source tree scanned by the ingestion walker.
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub env: AppEnv,
    pub debug: bool,
}

impl Config {
    pub fn load() -> Self {
        let data_dir = PathBuf::from(var_or("BEAR_DATA_DIR", DEFAULT_DATA_DIR));
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("app.db"));

        Self {
            secret_key: var_or("SECRET_KEY", DEFAULT_SECRET),
            database_path,
            data_dir,
            static_dir: PathBuf::from(var_or("STATIC_DIR", DEFAULT_STATIC_DIR)),
            host: var_or("HOST", "0.0.0.0"),
            port: parse_or("PORT", DEFAULT_PORT),
            env: parse_env(&var_or("APP_ENV", "development")),
            debug: parse_bool(&var_or("DEBUG", "false")),
        }
    }

    /// Hard startup policy: production must not run with the shipped secret.
    pub fn validate(&self) -> Result<()> {
        if self.env == AppEnv::Production && self.secret_key == DEFAULT_SECRET {
            return Err(ServerError::Config(
                "production requires a real SECRET_KEY environment variable".to_string(),
            ));
        }
        Ok(())
    }

    /// Non-fatal configuration audit used by `check-config`.
    pub fn defects(&self) -> Vec<String> {
        let mut defects = Vec::new();
        if self.secret_key == DEFAULT_SECRET {
            defects.push("SECRET_KEY is the development default".to_string());
        }
        if env::var("DATABASE_PATH").is_err() {
            defects.push(format!(
                "DATABASE_PATH not set, defaulting to {}",
                self.database_path.display()
            ));
        }
        if self.env == AppEnv::Production && self.debug {
            defects.push("DEBUG is enabled in production".to_string());
        }
        defects
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T
where
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}, using default");
            default
        }),
        Err(_) => default,
    }
}

fn parse_env(raw: &str) -> AppEnv {
    match raw.to_ascii_lowercase().as_str() {
        "production" => AppEnv::Production,
        "testing" => AppEnv::Testing,
        "development" => AppEnv::Development,
        other => {
            warn!("Unknown APP_ENV '{other}', falling back to development");
            AppEnv::Development
        }
    }
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "true" | "1" | "t")
}
