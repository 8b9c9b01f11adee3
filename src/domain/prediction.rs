//! Prediction records and the events derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SubmitterId;

/// A single submitter's recorded prediction.
///
/// Created once by the registry and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    submitter: SubmitterId,
    value: i64,
    submitted: bool,
    submitted_at: DateTime<Utc>,
}

impl Prediction {
    /// Create a submitted prediction.
    #[must_use]
    pub fn new(submitter: SubmitterId, value: i64, submitted_at: DateTime<Utc>) -> Self {
        Self {
            submitter,
            value,
            submitted: true,
            submitted_at,
        }
    }

    /// Rebuild a prediction from stored fields, including the submission flag.
    #[must_use]
    pub fn restore(
        submitter: SubmitterId,
        value: i64,
        submitted: bool,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            submitter,
            value,
            submitted,
            submitted_at,
        }
    }

    /// Get the submitter.
    #[must_use]
    pub fn submitter(&self) -> &SubmitterId {
        &self.submitter
    }

    /// Get the predicted value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns true if the prediction was accepted by the registry.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Get when the prediction was accepted.
    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// Notification that a prediction was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionEvent {
    pub submitter: SubmitterId,
    pub value: i64,
}

impl From<&Prediction> for SubmissionEvent {
    fn from(prediction: &Prediction) -> Self {
        Self {
            submitter: prediction.submitter.clone(),
            value: prediction.value,
        }
    }
}

/// A prediction that fell inside the tolerance band of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEvent {
    pub submitter: SubmitterId,
    pub value: i64,
}

impl MatchEvent {
    /// Create a match event.
    #[must_use]
    pub fn new(submitter: SubmitterId, value: i64) -> Self {
        Self { submitter, value }
    }
}

impl From<&Prediction> for MatchEvent {
    fn from(prediction: &Prediction) -> Self {
        Self::new(prediction.submitter.clone(), prediction.value)
    }
}
