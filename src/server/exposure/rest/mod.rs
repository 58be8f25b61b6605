//! REST API exposure for the order service
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`.

use super::super::handlers::AppState;
use super::super::host::ServerHost;
use crate::server::router::build_order_routes;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Order CRUD routes
    /// - Custom routes
    ///
    /// Every route is wrapped in request tracing and a permissive CORS layer.
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let state = AppState {
            service: host.service.clone(),
        };

        let mut app = Self::health_routes().merge(build_order_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        tracing::debug!(backend = host.backend_name(), "REST routes registered");

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        ))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "orders"
        }))
    }
}
