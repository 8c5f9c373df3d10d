//! Configuration module for the studio backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;
use crate::views::DEFAULT_HERO_INTERVAL;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Optional JSON file with documents to load into empty collections
    pub seed_path: Option<PathBuf>,
    /// Home page slideshow interval
    pub hero_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the configuration from a variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let db_path = var("STUDIO_DB_PATH")
            .unwrap_or_else(|| "./data/studio.sqlite".to_string())
            .into();

        let bind_addr = var("STUDIO_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let bind_addr = bind_addr.parse().map_err(|_| {
            AppError::Config(format!("Invalid STUDIO_BIND_ADDR format: {}", bind_addr))
        })?;

        let log_level = var("STUDIO_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let seed_path = var("STUDIO_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let hero_interval = match var("STUDIO_HERO_INTERVAL_SECS") {
            None => DEFAULT_HERO_INTERVAL,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs >= 1 => Duration::from_secs(secs),
                _ => {
                    return Err(AppError::Config(format!(
                        "STUDIO_HERO_INTERVAL_SECS must be a positive number of seconds, got {}",
                        raw
                    )))
                }
            },
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            seed_path,
            hero_interval,
        })
    }
}
