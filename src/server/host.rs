//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` owns the state every exposure needs: the order service and
//! the configuration it was started with. Exposures borrow it through an
//! `Arc` and never reach the repository directly.

use crate::config::ServiceConfig;
use crate::core::{OrderRepository, OrderService};
use std::sync::Arc;

/// Host context containing the application state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(repository, ServiceConfig::default()));
/// let app = RestExposure::build_router(host, vec![])?;
/// ```
pub struct ServerHost {
    /// Configuration the server was built with
    pub config: Arc<ServiceConfig>,

    /// Order operations shared by every handler
    pub service: Arc<OrderService>,
}

impl ServerHost {
    pub fn new(repository: Arc<dyn OrderRepository>, config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(OrderService::new(repository)),
        }
    }

    /// Name of the storage backend in use
    pub fn backend_name(&self) -> &'static str {
        self.service.repository().backend_name()
    }
}
