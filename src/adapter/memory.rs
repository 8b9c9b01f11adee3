//! In-memory registry store for tests and ephemeral runs.

use parking_lot::RwLock;

use crate::domain::{Prediction, RegistrySnapshot, SubmitterId};
use crate::error::{Error, RegistryError, Result};
use crate::port::RegistryStore;

/// Registry store that keeps everything in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Option<RegistrySnapshot>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistryStore for MemoryStore {
    fn load(&self) -> Result<Option<RegistrySnapshot>> {
        Ok(self.state.read().clone())
    }

    fn initialize(&self, owner: &SubmitterId, threshold: u64) -> Result<()> {
        let mut state = self.state.write();
        if state.is_none() {
            *state = Some(RegistrySnapshot {
                owner: owner.clone(),
                threshold,
                predictions: Vec::new(),
            });
        }
        Ok(())
    }

    fn record(&self, prediction: &Prediction) -> Result<()> {
        let mut state = self.state.write();
        match state.as_mut() {
            Some(snapshot) => {
                let submitter = prediction.submitter();
                if snapshot.predictions.iter().any(|p| p.submitter() == submitter) {
                    return Err(RegistryError::AlreadyPredicted {
                        submitter: submitter.clone(),
                    }
                    .into());
                }
                snapshot.predictions.push(prediction.clone());
                Ok(())
            }
            None => Err(Error::Database("registry store is not initialized".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn load_is_none_until_initialized() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        store.initialize(&SubmitterId::from("owner"), 4).unwrap();
        let snapshot = store.load().unwrap().unwrap();
        assert_eq!(snapshot.owner.as_str(), "owner");
        assert_eq!(snapshot.threshold, 4);
        assert!(snapshot.predictions.is_empty());
    }

    #[test]
    fn initialize_does_not_overwrite() {
        let store = MemoryStore::new();
        store.initialize(&SubmitterId::from("first"), 1).unwrap();
        store.initialize(&SubmitterId::from("second"), 2).unwrap();

        let snapshot = store.load().unwrap().unwrap();
        assert_eq!(snapshot.owner.as_str(), "first");
        assert_eq!(snapshot.threshold, 1);
    }

    #[test]
    fn record_appends_in_order() {
        let store = MemoryStore::new();
        store.initialize(&SubmitterId::from("owner"), 0).unwrap();
        store
            .record(&Prediction::new(SubmitterId::from("a"), 1, Utc::now()))
            .unwrap();
        store
            .record(&Prediction::new(SubmitterId::from("b"), 2, Utc::now()))
            .unwrap();

        let values: Vec<_> = store
            .load()
            .unwrap()
            .unwrap()
            .predictions
            .iter()
            .map(Prediction::value)
            .collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn record_rejects_duplicate_submitter() {
        let store = MemoryStore::new();
        store.initialize(&SubmitterId::from("owner"), 0).unwrap();
        store
            .record(&Prediction::new(SubmitterId::from("a"), 1, Utc::now()))
            .unwrap();

        let result = store.record(&Prediction::new(SubmitterId::from("a"), 2, Utc::now()));
        assert!(matches!(
            result,
            Err(Error::Registry(RegistryError::AlreadyPredicted { .. }))
        ));
        assert_eq!(store.load().unwrap().unwrap().predictions.len(), 1);
    }

    #[test]
    fn record_requires_initialization() {
        let store = MemoryStore::new();
        let result = store.record(&Prediction::new(SubmitterId::from("a"), 1, Utc::now()));
        assert!(result.is_err());
    }
}
