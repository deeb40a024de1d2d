use std::env;
use std::net::SocketAddr;

use crate::error::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://heybuddy.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Read settings from the process environment (load `.env` first).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is not a socket address: {}", e)))?;

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| AppError::Config(format!("MAX_UPLOAD_BYTES is not a number: {}", e)))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|e| AppError::Config(format!("DB_MAX_CONNECTIONS is not a number: {}", e)))?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };
        if db_max_connections == 0 {
            return Err(AppError::Config("DB_MAX_CONNECTIONS must be greater than 0".to_string()));
        }

        Ok(Self {
            database_url,
            bind_addr,
            max_upload_bytes,
            db_max_connections,
        })
    }
}
