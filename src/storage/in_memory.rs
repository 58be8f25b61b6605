//! In-memory implementation of OrderRepository for testing and development

use crate::core::error::{StorageError, StorageResult};
use crate::core::{Order, OrderRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory order repository
///
/// Uses RwLock for thread-safe access. Ids start at 1 and are never reused,
/// so a deleted order's id stays unknown. `find_all` returns ascending id order.
#[derive(Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<BTreeMap<i64, Order>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryOrderRepository {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: Order) -> StorageResult<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| StorageError::Poisoned("write"))?;

        let id = match order.id() {
            Some(id) if !orders.contains_key(&id) => return Err(StorageError::MissingRecord(id)),
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };

        let order = order.with_id(id);
        orders.insert(id, order.clone());

        Ok(order)
    }

    async fn find_all(&self) -> StorageResult<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|_| StorageError::Poisoned("read"))?;

        Ok(orders.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|_| StorageError::Poisoned("read"))?;

        Ok(orders.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        let orders = self
            .orders
            .read()
            .map_err(|_| StorageError::Poisoned("read"))?;

        Ok(orders.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| StorageError::Poisoned("write"))?;

        orders.remove(&id);

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "in-memory"
    }
}
