//! Order resource operations

use crate::core::error::{ServiceError, ServiceResult};
use crate::core::order::{Order, OrderPayload};
use crate::core::repository::OrderRepository;
use crate::core::validation::check;
use std::sync::Arc;

/// Confirmation text returned after a successful delete
pub const DELETE_CONFIRMATION: &str = "Order deleted successfully";

/// CRUD operations over an injected [`OrderRepository`]
///
/// Every operation returns a typed [`ServiceError`] on failure; nothing is
/// converted to HTTP here.
#[derive(Clone)]
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn OrderRepository> {
        &self.repository
    }

    /// Create a new order dated today
    pub async fn create(&self, payload: OrderPayload) -> ServiceResult<Order> {
        let order = Order::from_payload(payload)?;
        let saved = self.persist(order).await?;
        tracing::info!(id = ?saved.id(), total = saved.total(), "order created");
        Ok(saved)
    }

    /// List every order
    pub async fn list_all(&self) -> ServiceResult<Vec<Order>> {
        let orders = self.repository.find_all().await?;
        tracing::debug!(count = orders.len(), "orders listed");
        Ok(orders)
    }

    /// Get an order by id
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Order> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { id })
    }

    /// Overwrite name, address and total of an existing order
    ///
    /// The order date is kept.
    pub async fn update(&self, id: i64, payload: OrderPayload) -> ServiceResult<Order> {
        let mut order = self.get_by_id(id).await?;
        order.apply(payload)?;
        let saved = self.persist(order).await?;
        tracing::info!(id, "order updated");
        Ok(saved)
    }

    /// Delete an existing order
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ServiceError::NotFound { id });
        }
        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "order deleted");
        Ok(())
    }

    // Records are re-checked here so no caller can store an invalid order,
    // including one mutated through setters.
    async fn persist(&self, order: Order) -> ServiceResult<Order> {
        check(&order)?;
        Ok(self.repository.save(order).await?)
    }
}
