//! Counter Service
//!
//! One shared integer under a fixed key. Every operation is a single store
//! primitive, so concurrent callers are serialized by the store itself.

use std::sync::Arc;
use tracing::debug;

use crate::config::DEFAULT_COUNTER_KEY;
use crate::models::{AppError, AppResult};
use crate::store::KvStore;

#[derive(Clone)]
pub struct CounterService {
    store: Arc<dyn KvStore>,
    key: String,
}

impl CounterService {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Counter under `counter:value`
    pub fn with_default_key(store: Arc<dyn KvStore>) -> Self {
        Self::new(store, DEFAULT_COUNTER_KEY)
    }

    pub fn store(&self) -> &Arc<dyn KvStore> {
        &self.store
    }

    /// Current value, 0 when the key is unset. Never writes.
    /// Accepts exactly what INCR/DECR accept: no surrounding whitespace.
    pub async fn get(&self) -> AppResult<i64> {
        match self.store.get(&self.key).await? {
            None => Ok(0),
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                AppError::invalid_value(format!(
                    "value at '{}' is not an integer: {:?}",
                    self.key, raw
                ))
            }),
        }
    }

    /// INCR. Returns the new value.
    pub async fn increment(&self) -> AppResult<i64> {
        let value = self.store.incr(&self.key).await?;
        debug!(value, "counter incremented");
        Ok(value)
    }

    /// DECR. Returns the new value, which may be negative.
    pub async fn decrement(&self) -> AppResult<i64> {
        let value = self.store.decr(&self.key).await?;
        debug!(value, "counter decremented");
        Ok(value)
    }

    /// SET to 0 unconditionally. Returns 0.
    pub async fn reset(&self) -> AppResult<i64> {
        self.store.set(&self.key, 0).await?;
        debug!("counter reset");
        Ok(0)
    }
}
