//! Fixtures shared by the domain crates' tests.
//!
//! `TestMongo` (feature `mongodb`) runs a throwaway MongoDB container;
//! `TestDataBuilder` derives stable names from a test's own name so reruns
//! touch the same database and documents.

#[cfg(feature = "mongodb")]
mod mongo;

#[cfg(feature = "mongodb")]
pub use mongo::TestMongo;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeded generator for names and ids used in test data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let a = TestDataBuilder::from_test_name("test_create_category");
    /// let b = TestDataBuilder::from_test_name("test_create_category");
    /// assert_eq!(a, b);
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// assert_eq!(TestDataBuilder::new(12345).name("product", "main"), "test-product-12345-main");
    /// ```
    pub fn name(&self, kind: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", kind, self.seed, suffix)
    }

    /// One database per test keeps collections from leaking between tests.
    pub fn database_name(&self) -> String {
        format!("test_{:x}", self.seed)
    }

    /// Identifier for references nothing resolves, such as a product's category.
    pub fn reference_id(&self, suffix: &str) -> String {
        format!("ref-{:016x}-{}", self.seed, suffix)
    }
}
