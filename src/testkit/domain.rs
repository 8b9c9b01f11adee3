//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions so tests focus on assertions
//! rather than construction boilerplate.

use crate::adapter::MemoryStore;
use crate::app::PredictionService;
use crate::domain::{Registry, SubmitterId};

/// Owner identity used by the fixtures below.
pub const OWNER: &str = "O";

/// Create a [`SubmitterId`] from a string.
pub fn submitter(id: &str) -> SubmitterId {
    SubmitterId::from(id)
}

/// The fixture owner as a [`SubmitterId`].
pub fn owner() -> SubmitterId {
    SubmitterId::from(OWNER)
}

/// Generate `n` submitters named `u0`, `u1`, ..., `u{n-1}`.
pub fn make_submitters(n: usize) -> Vec<SubmitterId> {
    (0..n).map(|i| SubmitterId::from(format!("u{i}"))).collect()
}

/// Registry owned by [`OWNER`] pre-filled with `entries` in order.
///
/// # Panics
/// Panics if `entries` repeats a submitter.
pub fn registry_with(threshold: u64, entries: &[(&str, i64)]) -> Registry {
    let mut registry = Registry::new(owner(), threshold);
    for (id, value) in entries {
        registry
            .submit(submitter(id), *value)
            .expect("fixture submitters are unique");
    }
    registry
}

/// In-memory service owned by [`OWNER`].
///
/// # Panics
/// Panics if the in-memory store cannot be opened.
pub fn memory_service(threshold: u64) -> PredictionService {
    PredictionService::open(Box::new(MemoryStore::new()), owner(), threshold)
        .expect("open in-memory service")
}
