//! Persistence port for registry state.

use crate::domain::{Prediction, RegistrySnapshot, SubmitterId};
use crate::error::Result;

/// Durable storage for a single registry.
///
/// A store holds at most one registry: its owner, threshold, and every
/// accepted prediction in submission order.
pub trait RegistryStore: Send + Sync {
    /// Load the persisted registry, or `None` if the store is uninitialized.
    fn load(&self) -> Result<Option<RegistrySnapshot>>;

    /// Persist the owner and threshold of a new registry.
    fn initialize(&self, owner: &SubmitterId, threshold: u64) -> Result<()>;

    /// Append an accepted prediction.
    fn record(&self, prediction: &Prediction) -> Result<()>;
}
