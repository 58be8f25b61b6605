//! # Orders
//!
//! A REST service for managing customer orders.
//!
//! ## Features
//!
//! - **CRUD over `/orders`**: create, list, get, update and delete orders
//! - **Declarative validation**: field rules on the payload, checked before any handler runs
//! - **Centralized error mapping**: one dispatcher turns every failure into a
//!   `{ "message", "errors" }` body with the matching status code
//! - **Pluggable storage**: in-memory by default, PostgreSQL behind the `postgres` feature
//! - **Configuration-Based**: YAML file plus environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_repository(InMemoryOrderRepository::new())
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ErrorResponse, FieldViolation, Order, OrderPayload, OrderRepository, OrderService,
        ServiceError, ServiceResult, StorageError, StorageResult, ValidationError,
        service::DELETE_CONFIRMATION, validation::{OrderId, Validated},
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresOrderRepository;

    // === Config ===
    pub use crate::config::{ServiceConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{delete, get, post, put},
    };
}
