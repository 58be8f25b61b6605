//! Core module containing the order record, validation, errors and service

pub mod error;
pub mod order;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{
    ErrorResponse, FieldViolation, ServiceError, ServiceResult, StorageError, StorageResult,
    ValidationError,
};
pub use order::{Order, OrderPayload};
pub use repository::OrderRepository;
pub use service::OrderService;
