use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

/// All environment-derived settings, constructed once in `main` and passed
/// down explicitly. Nothing reads the environment after this is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Environment label (e.g. "staging", "production"; empty = unset).
    pub env_name: String,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub alerting: AlertingConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        let env_name = env_or("ENV_NAME", "");
        Self {
            server: ServerConfig::from_env(),
            store: StoreConfig::from_env(&env_name),
            alerting: AlertingConfig::from_env(),
            env_name,
        }
    }

    pub fn env_label(&self) -> &str {
        if self.env_name.is_empty() { "default" } else { &self.env_name }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (env: {}):", self.env_label());
        tracing::info!("  server:   {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  store:    data_dir={}, database={}",
            self.store.data_dir.display(),
            self.store.database
        );
        tracing::info!(
            "  alerting: dsn={}",
            if self.alerting.sentry_dsn.is_some() { "configured" } else { "(none)" }
        );
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: env_u16("SERVER_PORT", 2580),
        }
    }
}

// ── Document store ────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Location of the document store.
    pub data_dir: PathBuf,
    /// Collection database name, namespaced by environment when one is set
    /// (e.g. `models_staging`).
    pub database: String,
}

impl StoreConfig {
    pub fn from_env(env_name: &str) -> Self {
        let default_db = if env_name.is_empty() {
            "models".to_string()
        } else {
            format!("models_{}", env_name)
        };
        Self {
            data_dir: PathBuf::from(env_or("STORE_DATA_DIR", "./data")),
            database: env_or("STORE_DATABASE", &default_db),
        }
    }
}

// ── Alerting ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertingConfig {
    pub sentry_dsn: Option<String>,
}

impl AlertingConfig {
    pub fn from_env() -> Self {
        Self {
            sentry_dsn: env_opt("SENTRY_DSN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_database_is_namespaced_by_env() {
        let store = StoreConfig::from_env("staging");
        assert_eq!(store.database, "models_staging");
    }

    #[test]
    fn store_database_default_without_env() {
        let store = StoreConfig::from_env("");
        assert_eq!(store.database, "models");
    }
}
