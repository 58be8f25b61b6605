//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresOrderRepository`, backed by a PostgreSQL database via
//! `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! orders-rs = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! Orders live in a dedicated `orders` table. The id is a `BIGSERIAL`
//! assigned by the database, and the record rules are mirrored as
//! column constraints so rows written outside the service stay valid.

use crate::core::error::{StorageError, StorageResult};
use crate::core::{Order, OrderRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Apply the required table (idempotent).
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> StorageResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS orders (
            id BIGSERIAL PRIMARY KEY,
            customer_name TEXT NOT NULL CHECK (btrim(customer_name) <> ''),
            order_date DATE NOT NULL,
            shipping_address TEXT NOT NULL CHECK (btrim(shipping_address) <> ''),
            total DOUBLE PRECISION NOT NULL CHECK (total > 0)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

const SELECT_COLUMNS: &str = "id, customer_name, order_date, shipping_address, total";

fn order_from_row(row: &PgRow) -> StorageResult<Order> {
    let id: i64 = row.try_get("id")?;
    let customer_name: String = row.try_get("customer_name")?;
    let order_date: NaiveDate = row.try_get("order_date")?;
    let shipping_address: String = row.try_get("shipping_address")?;
    let total: f64 = row.try_get("total")?;

    Ok(Order::restore(
        id,
        customer_name,
        order_date,
        shipping_address,
        total,
    ))
}

// ---------------------------------------------------------------------------
// PostgresOrderRepository
// ---------------------------------------------------------------------------

/// Order repository backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// use orders::storage::PostgresOrderRepository;
///
/// let repo = PostgresOrderRepository::connect("postgres://localhost/orders", 5).await?;
/// let order = repo.save(order).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Wrap an existing pool. The schema is not touched.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and make sure the schema exists
    pub async fn connect(database_url: &str, max_connections: u32) -> StorageResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        ensure_schema(&pool).await?;
        tracing::info!(max_connections, "connected to PostgreSQL");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn save(&self, order: Order) -> StorageResult<Order> {
        let row = match order.id() {
            None => {
                sqlx::query(&format!(
                    "INSERT INTO orders (customer_name, order_date, shipping_address, total)
                     VALUES ($1, $2, $3, $4)
                     RETURNING {SELECT_COLUMNS}"
                ))
                .bind(order.customer_name())
                .bind(order.order_date())
                .bind(order.shipping_address())
                .bind(order.total())
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query(&format!(
                "UPDATE orders
                 SET customer_name = $2, order_date = $3, shipping_address = $4, total = $5
                 WHERE id = $1
                 RETURNING {SELECT_COLUMNS}"
            ))
            .bind(id)
            .bind(order.customer_name())
            .bind(order.order_date())
            .bind(order.shipping_address())
            .bind(order.total())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::MissingRecord(id))?,
        };

        order_from_row(&row)
    }

    async fn find_all(&self) -> StorageResult<Vec<Order>> {
        let rows = sqlx::query(&format!("SELECT {SELECT_COLUMNS} FROM orders ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(order_from_row).collect()
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Order>> {
        let row = sqlx::query(&format!("SELECT {SELECT_COLUMNS} FROM orders WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(order_from_row).transpose()
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM orders WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("PostgreSQL pool closed");
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
