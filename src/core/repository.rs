//! Repository trait for order persistence

use crate::core::error::StorageResult;
use crate::core::order::Order;
use async_trait::async_trait;

/// Persistence collaborator for orders
///
/// Implementations own id assignment and their own concurrency control.
/// The service layer is agnostic to the underlying storage mechanism.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store an order
    ///
    /// An order without an id is inserted and returned with the id the store
    /// assigned. An order with an id replaces the stored record with that id.
    async fn save(&self, order: Order) -> StorageResult<Order>;

    /// List every stored order
    async fn find_all(&self) -> StorageResult<Vec<Order>>;

    /// Get an order by id
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Order>>;

    /// Check whether an order with this id is stored
    async fn exists_by_id(&self, id: i64) -> StorageResult<bool>;

    /// Remove the order with this id
    ///
    /// Removing an id that is not stored is not an error.
    async fn delete_by_id(&self, id: i64) -> StorageResult<()>;

    /// Release backend resources at shutdown
    async fn close(&self) {}

    /// Short backend name, used in logs
    fn backend_name(&self) -> &'static str;
}
