//! Prediction registry.
//!
//! Owns the mapping of submitter identity to prediction and enforces the
//! one-prediction-per-submitter rule. Predictions are kept in an append-only
//! list with a lookup index, so iteration always follows submission order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Prediction, SubmissionEvent, SubmitterId};
use crate::error::{RegistryError, SnapshotError};

/// Complete registry state, sufficient to reconstruct a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub owner: SubmitterId,
    pub threshold: u64,
    /// Predictions in submission order.
    pub predictions: Vec<Prediction>,
}

/// Registry of predictions keyed by submitter.
#[derive(Debug, Clone)]
pub struct Registry {
    owner: SubmitterId,
    threshold: u64,
    predictions: Vec<Prediction>,
    index: HashMap<SubmitterId, usize>,
    submissions: Vec<SubmissionEvent>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new(owner: SubmitterId, threshold: u64) -> Self {
        Self {
            owner,
            threshold,
            predictions: Vec::new(),
            index: HashMap::new(),
            submissions: Vec::new(),
        }
    }

    /// Record a prediction for `submitter`, timestamped now.
    ///
    /// # Errors
    /// Returns [`RegistryError::AlreadyPredicted`] if the submitter already
    /// has a prediction. State is left untouched in that case.
    pub fn submit(&mut self, submitter: SubmitterId, value: i64) -> Result<(), RegistryError> {
        self.submit_at(submitter, value, Utc::now()).map(|_| ())
    }

    /// Record a prediction with an explicit acceptance time.
    ///
    /// Returns the stored prediction on success.
    ///
    /// # Errors
    /// Returns [`RegistryError::AlreadyPredicted`] on resubmission.
    pub fn submit_at(
        &mut self,
        submitter: SubmitterId,
        value: i64,
        submitted_at: DateTime<Utc>,
    ) -> Result<&Prediction, RegistryError> {
        if self.has_predicted(&submitter) {
            return Err(RegistryError::AlreadyPredicted { submitter });
        }

        let prediction = Prediction::new(submitter, value, submitted_at);
        Ok(self.push(prediction))
    }

    fn push(&mut self, prediction: Prediction) -> &Prediction {
        let position = self.predictions.len();
        debug!(
            submitter = %prediction.submitter(),
            value = prediction.value(),
            position,
            "Prediction recorded"
        );
        self.index.insert(prediction.submitter().clone(), position);
        self.submissions.push(SubmissionEvent::from(&prediction));
        self.predictions.push(prediction);
        &self.predictions[position]
    }

    /// The identity allowed to trigger evaluation.
    #[must_use]
    pub fn owner(&self) -> &SubmitterId {
        &self.owner
    }

    /// Maximum accepted deviation between predicted and actual value.
    #[must_use]
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Returns true if `submitter` has a recorded prediction.
    #[must_use]
    pub fn has_predicted(&self, submitter: &SubmitterId) -> bool {
        self.index.contains_key(submitter)
    }

    /// Look up the prediction for `submitter`.
    #[must_use]
    pub fn get(&self, submitter: &SubmitterId) -> Option<&Prediction> {
        self.index.get(submitter).map(|&i| &self.predictions[i])
    }

    /// Predictions in submission order.
    pub fn predictions(&self) -> impl Iterator<Item = &Prediction> {
        self.predictions.iter()
    }

    /// `(submitter, value)` pairs in submission order.
    pub fn list_predictions(&self) -> impl Iterator<Item = (&SubmitterId, i64)> {
        self.predictions.iter().map(|p| (p.submitter(), p.value()))
    }

    /// Submission notifications emitted so far, oldest first.
    #[must_use]
    pub fn submissions(&self) -> &[SubmissionEvent] {
        &self.submissions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Capture the full registry state.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            owner: self.owner.clone(),
            threshold: self.threshold,
            predictions: self.predictions.clone(),
        }
    }

    /// Rebuild a registry from a snapshot.
    ///
    /// The submission log is replayed from the predictions in order.
    ///
    /// # Errors
    /// Returns a [`SnapshotError`] if the owner is empty, a submitter appears
    /// twice, or a record is not flagged as submitted.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Result<Self, SnapshotError> {
        if snapshot.owner.is_empty() {
            return Err(SnapshotError::EmptyOwner);
        }

        let mut registry = Self::new(snapshot.owner, snapshot.threshold);
        for prediction in snapshot.predictions {
            if !prediction.is_submitted() {
                return Err(SnapshotError::NotSubmitted {
                    submitter: prediction.submitter().clone(),
                });
            }
            if registry.has_predicted(prediction.submitter()) {
                return Err(SnapshotError::DuplicateSubmitter {
                    submitter: prediction.submitter().clone(),
                });
            }
            registry.push(prediction);
        }
        Ok(registry)
    }
}
