//! Order service entry point
//!
//! Configuration comes from the YAML file named by `ORDERS_CONFIG` (optional)
//! plus `ORDERS_HOST`, `ORDERS_PORT` and `DATABASE_URL`. `RUST_LOG` takes
//! precedence over the configured log filter.

use anyhow::Result;
use orders::config::{ServiceConfig, StorageBackend};
use orders::core::OrderRepository;
use orders::server::ServerBuilder;
use orders::storage::InMemoryOrderRepository;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let repository = open_repository(&config).await?;
    tracing::info!(backend = repository.backend_name(), "storage ready");

    let addr = config.bind_address();
    ServerBuilder::new()
        .with_shared_repository(repository)
        .with_config(config)
        .serve(&addr)
        .await
}

async fn open_repository(config: &ServiceConfig) -> Result<Arc<dyn OrderRepository>> {
    match config.storage.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryOrderRepository::new())),
        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => {
            let url = config
                .storage
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("storage.database_url is required"))?;
            let repository = orders::storage::PostgresOrderRepository::connect(
                url,
                config.storage.max_connections,
            )
            .await?;
            Ok(Arc::new(repository))
        }
        #[cfg(not(feature = "postgres"))]
        StorageBackend::Postgres => anyhow::bail!(
            "the postgres backend requires building with `--features postgres`"
        ),
    }
}
