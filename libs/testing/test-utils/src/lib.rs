//! Shared test utilities for the organization domain crates
//!
//! - `TestDatabase`: PostgreSQL container with the organization schema applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.name("department", "main");
//!     let email = builder.email("ada");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Values derive from a seed, so a test produces the same data on every run.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_department");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-<prefix>-<seed>-<suffix>`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("department", "main"), "test-department-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A syntactically valid, seed-unique address.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.email("ada"), "ada.7@example.com");
    /// ```
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@example.com", local, self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that identifiers are strictly increasing
    pub fn assert_ascending(ids: &[i64], context: &str) {
        assert!(
            ids.windows(2).all(|pair| pair[0] < pair[1]),
            "{}: expected ascending identifiers, got {:?}",
            context,
            ids
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.email("ada"), builder2.email("ada"));
        assert_eq!(
            builder1.name("department", "test"),
            builder2.name("department", "test")
        );
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.email("ada"), builder2.email("ada"));
    }

    #[test]
    fn assert_ascending_accepts_sorted_ids() {
        assertions::assert_ascending(&[1, 2, 5], "sorted");
        assertions::assert_ascending(&[], "empty");
    }

    #[test]
    #[should_panic(expected = "expected ascending")]
    fn assert_ascending_rejects_unsorted_ids() {
        assertions::assert_ascending(&[2, 1], "unsorted");
    }
}
