//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::{logging_middleware, request_id_middleware};

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // The counter page is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/counter", get(handlers::get_counter))
        .route("/api/counter/increment", post(handlers::increment_counter))
        .route("/api/counter/decrement", post(handlers::decrement_counter))
        .route("/api/counter/reset", post(handlers::reset_counter))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // Outermost first: request id is assigned before anything logs
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(logging_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
