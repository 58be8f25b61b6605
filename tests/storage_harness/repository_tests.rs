//! Macro-generated test suite for `OrderRepository` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use orders::storage::InMemoryOrderRepository;
//!
//! order_repository_tests!(InMemoryOrderRepository::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_save_and_find`: save assigns an id, find returns the same fields
//! - `test_find_nonexistent`: unknown id returns None
//! - `test_find_all_empty` / `test_find_all_multiple`
//! - `test_save_existing_overwrites`: second save updates in place
//! - `test_save_unknown_id_fails`: saving with an id nobody issued is an error
//! - `test_exists_by_id`
//! - `test_delete_existing` / `test_delete_nonexistent`
//!
//! ## Edge Cases
//! - `test_ids_not_reused_after_delete`
//! - `test_order_date_preserved`
//! - `test_concurrent_saves`: parallel saves from spawned tasks

/// Generate a full `OrderRepository` conformance test suite.
///
/// `$factory` is re-evaluated for each test and must yield a fresh, empty
/// repository. For the concurrent test it must also be `Clone + 'static`.
#[macro_export]
macro_rules! order_repository_tests {
    ($factory:expr) => {
        mod order_repository_contract_tests {
            use super::*;
            use orders::core::{OrderRepository, StorageError};

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_save_and_find() {
                let repo = $factory;
                let order = kelan_blash();

                let saved = repo.save(order.clone()).await.unwrap();
                let id = saved.id().expect("saved order has an id");
                assert_same_fields(&saved, &order);

                let found = repo.find_by_id(id).await.unwrap().expect("order exists");
                assert_eq!(found.id(), Some(id));
                assert_same_fields(&found, &order);
            }

            #[tokio::test]
            async fn test_find_nonexistent() {
                let repo = $factory;
                assert!(repo.find_by_id(999_999).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let repo = $factory;
                assert_count(&repo.find_all().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_find_all_multiple() {
                let repo = $factory;
                for order in sample_batch(5) {
                    repo.save(order).await.unwrap();
                }

                let all = repo.find_all().await.unwrap();
                assert_count(&all, 5);

                let ids: Vec<i64> = all.iter().filter_map(|o| o.id()).collect();
                let mut sorted = ids.clone();
                sorted.sort();
                assert_eq!(ids, sorted, "find_all should return ascending ids");
            }

            #[tokio::test]
            async fn test_save_existing_overwrites() {
                let repo = $factory;
                let mut saved = repo.save(kelan_blash()).await.unwrap();
                let id = saved.id().unwrap();

                saved.set_customer_name("Updated Name");
                saved.set_shipping_address("305 Ocean Drive");
                saved.set_total(300.0);
                let updated = repo.save(saved.clone()).await.unwrap();

                assert_eq!(updated.id(), Some(id));
                let found = repo.find_by_id(id).await.unwrap().unwrap();
                assert_same_fields(&found, &saved);
                assert_count(&repo.find_all().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_save_unknown_id_fails() {
                let repo = $factory;
                let order = kelan_blash().with_id(424_242);

                let err = repo.save(order).await.unwrap_err();
                assert!(
                    matches!(err, StorageError::MissingRecord(424_242)),
                    "unexpected error: {:?}",
                    err
                );
            }

            #[tokio::test]
            async fn test_exists_by_id() {
                let repo = $factory;
                let saved = repo.save(kelan_blash()).await.unwrap();

                assert!(repo.exists_by_id(saved.id().unwrap()).await.unwrap());
                assert!(!repo.exists_by_id(999_999).await.unwrap());
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let repo = $factory;
                let saved = repo.save(kelan_blash()).await.unwrap();
                let id = saved.id().unwrap();

                repo.delete_by_id(id).await.unwrap();

                assert!(repo.find_by_id(id).await.unwrap().is_none());
                assert!(!repo.exists_by_id(id).await.unwrap());
                assert_count(&repo.find_all().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let repo = $factory;
                repo.save(kelan_blash()).await.unwrap();

                repo.delete_by_id(999_999).await.unwrap();
                assert_count(&repo.find_all().await.unwrap(), 1);
            }

            // ==================================================================
            // Edge cases
            // ==================================================================

            #[tokio::test]
            async fn test_ids_not_reused_after_delete() {
                let repo = $factory;
                let first = repo.save(kelan_blash()).await.unwrap();
                let first_id = first.id().unwrap();
                repo.delete_by_id(first_id).await.unwrap();

                let second = repo.save(kelan_blash()).await.unwrap();
                assert_ne!(second.id(), Some(first_id));
                assert!(!repo.exists_by_id(first_id).await.unwrap());
            }

            #[tokio::test]
            async fn test_order_date_preserved() {
                let repo = $factory;
                let order = create_dated_order("Taty Phelps", "305 Ocean Drive", 300.0, past_date());

                let saved = repo.save(order).await.unwrap();
                let found = repo.find_by_id(saved.id().unwrap()).await.unwrap().unwrap();
                assert_eq!(found.order_date(), past_date());
            }

            #[tokio::test]
            async fn test_concurrent_saves() {
                let repo = $factory;
                let mut handles = Vec::new();

                for order in sample_batch(10) {
                    let repo = repo.clone();
                    handles.push(tokio::spawn(async move { repo.save(order).await }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap().unwrap().id().unwrap());
                }
                ids.sort();
                ids.dedup();

                assert_eq!(ids.len(), 10, "every save should get a distinct id");
                assert_count(&repo.find_all().await.unwrap(), 10);
            }
        }
    };
}
