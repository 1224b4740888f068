//! Redis-backed Key-Value Store
//!
//! Uses a `ConnectionManager`: one multiplexed connection shared by all
//! handlers, re-established automatically after the server drops it.

use ::redis::aio::ConnectionManager;
use ::redis::{AsyncCommands, Client};
use async_trait::async_trait;
use tracing::{debug, error};

use super::KvStore;
use crate::models::{AppError, AppResult};

#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Open a managed connection. Fails fast if the first connect fails.
    pub async fn connect(url: &str) -> AppResult<Self> {
        let client = Client::open(url)?;
        let conn = ConnectionManager::new(client).await.map_err(|e| {
            error!("Redis connect failed: {}", e);
            AppError::from(e)
        })?;
        Ok(Self { conn })
    }

    async fn step(&self, command: &str, key: &str) -> AppResult<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = ::redis::cmd(command)
            .arg(key)
            .query_async(&mut conn)
            .await?;
        debug!(key, command, value, "redis step");
        Ok(value)
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(key).await?;
        Ok(raw)
    }

    async fn set(&self, key: &str, value: i64) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn incr(&self, key: &str) -> AppResult<i64> {
        self.step("INCR", key).await
    }

    async fn decr(&self, key: &str) -> AppResult<i64> {
        self.step("DECR", key).await
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let _: String = ::redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
