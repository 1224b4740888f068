//! Configuration module for the counter service
//! Reads bind address, store backend and counter key from the environment

use std::net::SocketAddr;

use crate::models::{AppError, AppResult};

/// Key the counter lives under unless `COUNTER_KEY` overrides it
pub const DEFAULT_COUNTER_KEY: &str = "counter:value";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/0";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Which key-value backend holds the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    /// In-process store, lost on restart
    Memory,
}

impl StoreBackend {
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(AppError::invalid_config(format!(
                "Unknown COUNTER_STORE '{}'. Supported: redis, memory",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Redis => "redis",
            Self::Memory => "memory",
        }
    }
}

/// Configuration for the counter service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Redis connection URL (ignored by the memory backend)
    pub redis_url: String,
    pub counter_key: String,
    pub store: StoreBackend,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            counter_key: DEFAULT_COUNTER_KEY.to_string(),
            store: StoreBackend::Redis,
        }
    }
}

impl ServiceConfig {
    /// Load from process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup.
    /// Hosting platforms set `PORT`, so it wins over `COUNTER_PORT`.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("COUNTER_HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT").or_else(|| lookup("COUNTER_PORT")) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::invalid_config(format!("Invalid port '{}'", raw))
            })?,
            None => defaults.port,
        };

        let redis_url = lookup("REDIS_URL").unwrap_or(defaults.redis_url);

        let counter_key = lookup("COUNTER_KEY").unwrap_or(defaults.counter_key);
        if counter_key.trim().is_empty() {
            return Err(AppError::invalid_config("COUNTER_KEY must not be empty"));
        }

        let store = match lookup("COUNTER_STORE") {
            Some(raw) => StoreBackend::parse(&raw)?,
            None => defaults.store,
        };

        Ok(Self {
            host,
            port,
            redis_url,
            counter_key,
            store,
        })
    }

    pub fn bind_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                AppError::invalid_config(format!(
                    "Invalid bind address {}:{}",
                    self.host, self.port
                ))
            })
    }
}
