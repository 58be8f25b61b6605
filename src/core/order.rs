//! The order record and its inbound payload

use crate::core::error::ValidationError;
use crate::core::validation::{check, not_blank};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Today's date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Candidate order as sent by a client on create and update
///
/// Every field is optional at the binding level so that a missing value is
/// reported as a rule violation rather than a parse failure. Unknown fields,
/// including a client-supplied `id` or `orderDate`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[validate(
        required(message = "Customer name must not be blank"),
        custom(function = "not_blank", message = "Customer name must not be blank")
    )]
    pub customer_name: Option<String>,

    #[validate(
        required(message = "Shipping address must not be blank"),
        custom(function = "not_blank", message = "Shipping address must not be blank")
    )]
    pub shipping_address: Option<String>,

    #[validate(
        required(message = "Total must not be null"),
        range(exclusive_min = 0.0, message = "Total must be a positive number")
    )]
    pub total: Option<f64>,
}

impl OrderPayload {
    pub fn new(
        customer_name: impl Into<String>,
        shipping_address: impl Into<String>,
        total: f64,
    ) -> Self {
        Self {
            customer_name: Some(customer_name.into()),
            shipping_address: Some(shipping_address.into()),
            total: Some(total),
        }
    }
}

/// A customer order
///
/// `id` is `None` until a repository stores the record and never changes
/// afterwards. `order_date` is stamped when the record is built from a
/// payload and is not touched by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: Option<i64>,

    #[validate(custom(function = "not_blank", message = "Customer name must not be blank"))]
    customer_name: String,

    order_date: NaiveDate,

    #[validate(custom(function = "not_blank", message = "Shipping address must not be blank"))]
    shipping_address: String,

    #[validate(range(exclusive_min = 0.0, message = "Total must be a positive number"))]
    total: f64,
}

impl Order {
    /// Create an unsaved order dated today
    pub fn new(
        customer_name: impl Into<String>,
        shipping_address: impl Into<String>,
        total: f64,
    ) -> Self {
        Self {
            id: None,
            customer_name: customer_name.into(),
            order_date: today(),
            shipping_address: shipping_address.into(),
            total,
        }
    }

    /// Build an unsaved order from a payload
    ///
    /// Fails when any payload rule is violated. The order date is always
    /// today; callers cannot backdate or postdate through this path.
    pub fn from_payload(payload: OrderPayload) -> Result<Self, ValidationError> {
        check(&payload)?;
        let (customer_name, shipping_address, total) = payload.into_parts();
        Ok(Self::new(customer_name, shipping_address, total))
    }

    /// Rebuild a stored order, e.g. from a database row
    pub fn restore(
        id: i64,
        customer_name: String,
        order_date: NaiveDate,
        shipping_address: String,
        total: f64,
    ) -> Self {
        Self {
            id: Some(id),
            customer_name,
            order_date,
            shipping_address,
            total,
        }
    }

    /// Attach the store-assigned id
    ///
    /// Has no effect on an order that already has one.
    pub fn with_id(mut self, id: i64) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }

    /// Overwrite the mutable fields from a payload
    ///
    /// `order_date` is left as originally set.
    pub fn apply(&mut self, payload: OrderPayload) -> Result<(), ValidationError> {
        check(&payload)?;
        let (customer_name, shipping_address, total) = payload.into_parts();
        self.customer_name = customer_name;
        self.shipping_address = shipping_address;
        self.total = total;
        Ok(())
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn set_customer_name(&mut self, customer_name: impl Into<String>) {
        self.customer_name = customer_name.into();
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn set_order_date(&mut self, order_date: NaiveDate) {
        self.order_date = order_date;
    }

    pub fn shipping_address(&self) -> &str {
        &self.shipping_address
    }

    pub fn set_shipping_address(&mut self, shipping_address: impl Into<String>) {
        self.shipping_address = shipping_address.into();
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn set_total(&mut self, total: f64) {
        self.total = total;
    }
}

impl OrderPayload {
    // Only called after `check` has passed, so every field is present.
    fn into_parts(self) -> (String, String, f64) {
        (
            self.customer_name.unwrap_or_default(),
            self.shipping_address.unwrap_or_default(),
            self.total.unwrap_or_default(),
        )
    }
}
