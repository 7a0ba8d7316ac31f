//! Shared test utilities.
//!
//! Provides `TestDataBuilder`, a deterministic test-data generator: the same
//! test name always yields the same ids and titles, so assertions can be
//! written against stable values without hard-coding UUIDs.

use uuid::Uuid;

/// Builder for test data with deterministic randomization.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from a test name (seed derived from its hash). This is the
    /// recommended constructor for reproducible test data.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic UUID for the n-th record of this test.
    pub fn task_id(&self, n: u64) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        bytes[8..].copy_from_slice(&n.to_le_bytes());
        Uuid::from_bytes(bytes)
    }

    /// Unique human-readable title, e.g. `test-task-12345-main`.
    pub fn title(&self, suffix: &str) -> String {
        format!("test-task-{}-{}", self.seed, suffix)
    }
}
