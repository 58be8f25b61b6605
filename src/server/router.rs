//! Router builder utilities for order routes

use super::handlers::{
    AppState, create_order, delete_order, get_order, list_orders, update_order,
};
use axum::{Router, routing::get};

/// Build the order routes
///
/// - GET /orders - List all orders
/// - POST /orders - Create an order
/// - GET /orders/{id} - Get an order
/// - PUT /orders/{id} - Update an order
/// - DELETE /orders/{id} - Delete an order
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .with_state(state)
}
