//! Typed error handling for the order service
//!
//! Every failure produced while handling a request is a [`ServiceError`].
//! Handlers return `ServiceResult<T>` and the error is turned into an HTTP
//! response exactly once, by the `IntoResponse` impl at the bottom of the
//! dispatch section.
//!
//! # Error Categories
//!
//! - [`ServiceError::NotFound`]: a lookup by id found nothing (404)
//! - [`ServiceError::Validation`]: the payload failed binding or field rules (400)
//! - [`ServiceError::Rejected`]: the request was refused before binding, keeps
//!   the status axum chose (e.g. 413 for an over-limit body)
//! - [`ServiceError::Storage`] / [`ServiceError::Internal`]: anything else (500)
//!
//! # Example
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! match service.get_by_id(42).await {
//!     Ok(order) => println!("Found: {:?}", order),
//!     Err(ServiceError::NotFound { id }) => println!("Order {} not found", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message used for every validation failure response
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation Error";

/// Message used for every unclassified failure response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// The main error type for order operations
#[derive(Debug)]
pub enum ServiceError {
    /// No order exists with the requested id
    NotFound { id: i64 },

    /// The request payload could not be bound or violated field rules
    Validation(ValidationError),

    /// The request was refused before its content could be read
    Rejected { status: StatusCode, message: String },

    /// The repository failed
    Storage(StorageError),

    /// Any other failure
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound { id } => write!(f, "Order not found with id: {}", id),
            ServiceError::Validation(e) => write!(f, "{}", e),
            ServiceError::Rejected { message, .. } => write!(f, "{}", message),
            ServiceError::Storage(e) => write!(f, "{}", e),
            ServiceError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Validation(e) => Some(e),
            ServiceError::Storage(e) => Some(e),
            ServiceError::NotFound { .. }
            | ServiceError::Rejected { .. }
            | ServiceError::Internal(_) => None,
        }
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Error body returned for every failed request
///
/// `errors` is empty when no field-level detail applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }
}

impl ServiceError {
    /// Get the HTTP status code for this error
    ///
    /// The specific kinds are matched first; everything else falls through
    /// to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Rejected { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code, used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound { .. } => "ORDER_NOT_FOUND",
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::Rejected { .. } => "REQUEST_REJECTED",
            ServiceError::Storage(_) => "STORAGE_ERROR",
            ServiceError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error falls through to the catch-all handler
    pub fn is_unclassified(&self) -> bool {
        match self {
            ServiceError::NotFound { .. } | ServiceError::Validation(_) => false,
            ServiceError::Rejected { status, .. } => status.is_server_error(),
            _ => true,
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            ServiceError::NotFound { .. } => ErrorResponse::new(self.to_string(), Vec::new()),
            ServiceError::Validation(e) => {
                ErrorResponse::new(VALIDATION_ERROR_MESSAGE, e.messages())
            }
            ServiceError::Rejected { status, message } => ErrorResponse::new(
                status.canonical_reason().unwrap_or("Request Rejected"),
                vec![message.clone()],
            ),
            _ => ErrorResponse::new(INTERNAL_ERROR_MESSAGE, vec![self.to_string()]),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_unclassified() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), status = %status, error = %self, "request rejected");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single rule violation
///
/// `field` is the JSON name of the offending field, or `None` when the
/// failure is not attributable to one field (e.g. malformed JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: Option<String>,
    pub message: String,
}

impl FieldViolation {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn global(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Errors raised when a payload cannot be accepted
#[derive(Debug)]
pub enum ValidationError {
    /// One or more field rules failed
    Fields(Vec<FieldViolation>),

    /// The body could not be bound to the expected shape
    InvalidBody { message: String },

    /// A path id was not a valid integer
    InvalidId { value: String },
}

impl ValidationError {
    /// One string per violation, formatted for the error body
    pub fn messages(&self) -> Vec<String> {
        match self {
            ValidationError::Fields(violations) => {
                violations.iter().map(ToString::to_string).collect()
            }
            ValidationError::InvalidBody { message } => vec![message.clone()],
            ValidationError::InvalidId { value } => {
                vec![format!("id: '{}' is not a valid order id", value)]
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Fields(_) => {
                write!(f, "Validation errors: {}", self.messages().join(", "))
            }
            ValidationError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            ValidationError::InvalidId { value } => {
                write!(f, "Invalid order id: '{}'", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by repository implementations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to acquire {0} lock on order store")]
    Poisoned(&'static str),

    #[error("Order with id {0} cannot be saved: it does not exist")]
    MissingRecord(i64),

    #[error("Storage backend '{0}' is unavailable")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Storage(err)
    }
}

// =============================================================================
// Result type aliases
// =============================================================================

/// A specialized Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// A specialized Result type for repository operations
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Tests
// =============================================================================
