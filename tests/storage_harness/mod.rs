//! Shared test harness for storage backend testing
//!
//! Provides sample orders, payload builders and assertion helpers, plus the
//! `order_repository_tests!` and `rest_integration_tests!` macros that run the
//! same contract against every repository implementation.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod repository_tests;

#[macro_use]
pub mod integration;

use chrono::NaiveDate;
use orders::core::{Order, OrderPayload};

// ---------------------------------------------------------------------------
// Helper functions: order creation
// ---------------------------------------------------------------------------

/// Build an unsaved order dated today
pub fn create_test_order(customer_name: &str, shipping_address: &str, total: f64) -> Order {
    Order::new(customer_name, shipping_address, total)
}

/// Build an unsaved order with a fixed order date
pub fn create_dated_order(
    customer_name: &str,
    shipping_address: &str,
    total: f64,
    order_date: NaiveDate,
) -> Order {
    let mut order = Order::new(customer_name, shipping_address, total);
    order.set_order_date(order_date);
    order
}

/// The order used throughout the examples
pub fn kelan_blash() -> Order {
    create_test_order("Kelan Blash", "123 EZ Street", 200.0)
}

/// Generate a batch of `n` distinct unsaved orders
pub fn sample_batch(n: usize) -> Vec<Order> {
    (0..n)
        .map(|i| {
            create_test_order(
                &format!("Customer_{}", i),
                &format!("{} Main Street", 100 + i),
                (i as f64) * 10.0 + 5.5,
            )
        })
        .collect()
}

/// Build a valid JSON payload
pub fn payload_json(customer_name: &str, shipping_address: &str, total: f64) -> serde_json::Value {
    serde_json::to_value(OrderPayload::new(customer_name, shipping_address, total))
        .expect("payload serializes")
}

/// A fixed date in the past, used to prove dates are preserved
pub fn past_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 5, 17).expect("valid date")
}

// ---------------------------------------------------------------------------
// Assertions helpers
// ---------------------------------------------------------------------------

/// Assert that two orders carry the same field values, ignoring the id
pub fn assert_same_fields(actual: &Order, expected: &Order) {
    assert_eq!(actual.customer_name(), expected.customer_name());
    assert_eq!(actual.shipping_address(), expected.shipping_address());
    assert_eq!(actual.order_date(), expected.order_date());
    assert!(
        (actual.total() - expected.total()).abs() < f64::EPSILON,
        "Expected total {}, got {}",
        expected.total(),
        actual.total()
    );
}

/// Assert that a list contains exactly `n` items.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}
