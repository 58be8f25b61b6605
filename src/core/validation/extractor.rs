//! Axum extractors for validated request input
//!
//! `Validated<T>` binds the JSON body to `T` and runs its declared rules
//! before the handler is called. `OrderId` does the same for the `{id}`
//! path segment. A failure to bind either one is rejected as
//! `ServiceError::Validation`, so it shares the 400 path of the dispatcher.
//! Rejections that are not about the shape of the input (an over-limit
//! body, a route without an `{id}`) keep their own status.

use super::rules::check;
use crate::core::error::{ServiceError, ValidationError};
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that validates the payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(
///     Validated(payload): Validated<OrderPayload>,
/// ) -> ServiceResult<Json<Order>> {
///     // payload is bound and every rule passed
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    /// Get the inner payload
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        check(&payload)?;

        Ok(Validated(payload))
    }
}

fn json_rejection(rejection: JsonRejection) -> ServiceError {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => ValidationError::InvalidBody {
            message: rejection.body_text(),
        }
        .into(),
        other => ServiceError::Rejected {
            status: other.status(),
            message: other.body_text(),
        },
    }
}

/// Order id taken from the `{id}` path segment
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn get_order(OrderId(id): OrderId) -> ServiceResult<Json<Order>> {
///     // id is a valid i64
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderId(pub i64);

impl<S> FromRequestParts<S> for OrderId
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(OrderId(parse_order_id(&raw)?)),
            Err(PathRejection::FailedToDeserializePathParams(_)) => {
                // The segment could not be decoded, so report it as sent
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                Err(ValidationError::InvalidId {
                    value: raw.to_string(),
                }
                .into())
            }
            Err(other) => Err(ServiceError::Internal(other.body_text())),
        }
    }
}

/// Parse an order id
///
/// Leading and trailing whitespace is ignored.
pub fn parse_order_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidId {
            value: raw.to_string(),
        })
}
