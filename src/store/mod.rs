//! Store Module - Key-Value Backends
//!
//! The counter only needs five primitives from its store: GET, SET, INCR,
//! DECR and PING. `KvStore` exposes exactly those so Redis and the
//! in-process map are interchangeable behind `Arc<dyn KvStore>`.

pub mod memory;
pub mod redis;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::{ServiceConfig, StoreBackend};
use crate::models::AppResult;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

/// Atomic integer primitives over named string values.
///
/// INCR and DECR treat a missing key as 0 and must be atomic with respect to
/// concurrent callers. A present value that is not an `i64` is an error, as
/// is stepping past `i64` bounds.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: i64) -> AppResult<()>;
    async fn incr(&self, key: &str) -> AppResult<i64>;
    async fn decr(&self, key: &str) -> AppResult<i64>;
    async fn ping(&self) -> AppResult<()>;

    /// Backend name for logs and health output
    fn backend(&self) -> &'static str;
}

/// Build the backend selected by configuration
pub async fn connect(config: &ServiceConfig) -> AppResult<Arc<dyn KvStore>> {
    match config.store {
        StoreBackend::Redis => {
            let store = RedisStore::connect(&config.redis_url).await?;
            info!("Connected to Redis");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store (counter is lost on restart)");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
