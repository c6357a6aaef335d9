//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the product store shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per page group)
//! - `dto.rs`: posted form bodies

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    routes::router()
        .fallback(routes::pages::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(services)),
        )
}
