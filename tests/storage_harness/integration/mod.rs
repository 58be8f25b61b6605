//! Integration test infrastructure for storage backends.
//!
//! Builds the production REST router on top of any `OrderRepository`, so the
//! HTTP suite exercises the real handlers, extractor and error dispatch.
//!
//! ```text
//! axum_test::TestServer
//!     └─ Router (built by build_test_router)
//!         ├─ GET    /health, /healthz
//!         ├─ POST   /orders
//!         ├─ GET    /orders
//!         ├─ GET    /orders/{id}
//!         ├─ PUT    /orders/{id}
//!         └─ DELETE /orders/{id}
//! ```


use axum::Router;
use orders::core::OrderRepository;
use orders::server::ServerBuilder;
use std::sync::Arc;

/// Build the full REST router over the given repository
pub fn build_test_router(repository: Arc<dyn OrderRepository>) -> Router {
    ServerBuilder::new()
        .with_shared_repository(repository)
        .build()
        .expect("router builds")
}
