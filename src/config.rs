//! Environment-backed configuration.

use std::env;
use std::path::PathBuf;

/// Default database when `GASTOBOT_DATABASE_URL` is unset.
const DEFAULT_DATABASE_URL: &str = "sqlite:gastobot.db";

#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection string for the expense store.
    pub database_url: String,
    /// Directory rendered chart images are written to.
    pub charts_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url =
            env::var("GASTOBOT_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let charts_dir = env::var("GASTOBOT_CHARTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        Self {
            database_url,
            charts_dir,
        }
    }
}
