//! Validation of inbound order payloads
//!
//! Field rules are declared with the `validator` derive on the payload and
//! record types. This module supplies the custom rules they reference, the
//! conversion from `validator` reports into [`FieldViolation`]s, and the
//! `Validated<T>` and `OrderId` extractors that bind and check input at the
//! HTTP boundary.
//!
//! [`FieldViolation`]: crate::core::error::FieldViolation

pub mod extractor;
pub mod rules;

pub use extractor::{OrderId, Validated, parse_order_id};
pub use rules::{check, not_blank, violations};
