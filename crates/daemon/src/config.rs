//! Daemon configuration loaded from environment variables

use marketplace_core::error::{AppError, Result};

const DEFAULT_DB_PATH: &str = "~/.marketplace/marketplace.db";
const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9530;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Development: pretty formatting with colors
    Pretty,
    /// Production: JSON structured logging
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file (tilde expanded) or `sqlite::memory:`
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = lookup("MARKETPLACE_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let rpc_port = match lookup("MARKETPLACE_RPC_PORT") {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::Config(format!("Invalid MARKETPLACE_RPC_PORT: {}", raw))
            })?,
            None => DEFAULT_RPC_PORT,
        };

        let log_format = match lookup("MARKETPLACE_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "Invalid MARKETPLACE_LOG_FORMAT: {} (expected pretty or json)",
                    other
                )))
            }
        };

        Ok(Self {
            db_path: shellexpand::tilde(&db_path).into_owned(),
            rpc_host: lookup("MARKETPLACE_RPC_HOST")
                .unwrap_or_else(|| DEFAULT_RPC_HOST.to_string()),
            rpc_port,
            log_format,
        })
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path.contains(":memory:")
    }
}
