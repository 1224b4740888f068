//! Redis Counter Library
//!
//! A single shared integer counter served over HTTP. Reads default to 0,
//! increments and decrements are delegated to the store's atomic INCR/DECR,
//! reset writes 0.

pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod store;
pub mod telemetry;

pub use crate::api::{create_router, AppState, CounterResponse};
pub use crate::config::{ServiceConfig, StoreBackend, DEFAULT_COUNTER_KEY};
pub use crate::core::CounterService;
pub use crate::models::{AppError, AppResult, ErrorCode};
pub use crate::store::{KvStore, MemoryStore, RedisStore};
