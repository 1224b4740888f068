//! In-Memory Key-Value Store
//!
//! Thread-safe stand-in for Redis built on DashMap. Values are kept as
//! decimal strings so malformed data behaves the way it does in Redis.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use super::KvStore;
use crate::models::{AppError, AppResult};

#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw string, bypassing integer encoding
    pub fn set_raw(&self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Add `delta` under the shard's entry lock.
    fn step(&self, key: &str, delta: i64) -> AppResult<i64> {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| "0".to_string());

        let current: i64 = entry.parse().map_err(|_| {
            AppError::invalid_value(format!(
                "value at '{}' is not an integer or out of range",
                key
            ))
        })?;
        let next = current.checked_add(delta).ok_or_else(|| {
            AppError::invalid_value(format!("increment or decrement at '{}' would overflow", key))
        })?;

        *entry = next.to_string();
        debug!(key, value = next, "memory store step");
        Ok(next)
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: i64) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn incr(&self, key: &str) -> AppResult<i64> {
        self.step(key, 1)
    }

    async fn decr(&self, key: &str) -> AppResult<i64> {
        self.step(key, -1)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
