//! API Request Handlers

use axum::extract::{Json, State};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

use super::types::*;
use crate::core::counter::CounterService;

/// Shared application state
pub struct AppState {
    pub counter: CounterService,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(counter: CounterService) -> Self {
        Self {
            counter,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();
    let store = state.counter.store();

    let store_reachable = match store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(code = e.code_str(), "Store ping failed: {}", e.message);
            false
        }
    };

    let data = HealthData {
        status: if store_reachable { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        store: store.backend().to_string(),
        store_reachable,
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

// ============================================
// Counter
// ============================================

pub async fn get_counter(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CounterResponse>, Rejection> {
    let start = Instant::now();
    let value = state.counter.get().await.map_err(|e| reject(e, start))?;
    Ok(Json(value.into()))
}

pub async fn increment_counter(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CounterResponse>, Rejection> {
    let start = Instant::now();
    let value = state.counter.increment().await.map_err(|e| reject(e, start))?;
    Ok(Json(value.into()))
}

pub async fn decrement_counter(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CounterResponse>, Rejection> {
    let start = Instant::now();
    let value = state.counter.decrement().await.map_err(|e| reject(e, start))?;
    Ok(Json(value.into()))
}

pub async fn reset_counter(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CounterResponse>, Rejection> {
    let start = Instant::now();
    let value = state.counter.reset().await.map_err(|e| reject(e, start))?;
    Ok(Json(value.into()))
}
