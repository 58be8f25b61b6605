//! HTTP handlers for order operations
//!
//! Handlers only translate between HTTP and [`OrderService`]. Every failure
//! is returned as a [`ServiceError`], which renders itself through
//! `IntoResponse`.

use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use crate::core::error::{ServiceError, ServiceResult};
use crate::core::service::DELETE_CONFIRMATION;
use crate::core::validation::{OrderId, Validated};
use crate::core::{Order, OrderPayload, OrderService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<OrderService>,
}

/// Create an order
///
/// Route: POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    Validated(payload): Validated<OrderPayload>,
) -> ServiceResult<(StatusCode, Json<Order>)> {
    let order = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List all orders
///
/// Route: GET /orders
pub async fn list_orders(State(state): State<AppState>) -> ServiceResult<Json<Vec<Order>>> {
    Ok(Json(state.service.list_all().await?))
}

/// Get an order by id
///
/// Route: GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
) -> ServiceResult<Json<Order>> {
    Ok(Json(state.service.get_by_id(id).await?))
}

/// Replace name, address and total of an order
///
/// Route: PUT /orders/{id}
pub async fn update_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
    Validated(payload): Validated<OrderPayload>,
) -> ServiceResult<Json<Order>> {
    Ok(Json(state.service.update(id, payload).await?))
}

/// Delete an order
///
/// Route: DELETE /orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
) -> Result<&'static str, ServiceError> {
    state.service.delete(id).await?;
    Ok(DELETE_CONFIRMATION)
}
