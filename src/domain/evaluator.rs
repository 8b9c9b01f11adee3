//! Evaluation of recorded predictions against an observed value.

use tracing::debug;

use super::{MatchEvent, Registry, SubmitterId, ToleranceBand};
use crate::error::EvaluationError;

/// Read-only evaluator over a registry.
///
/// Holds a shared borrow of the registry, so no submission can interleave
/// with a scan.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    registry: &'a Registry,
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// The band a prediction must fall into to match `actual`.
    #[must_use]
    pub fn band(&self, actual: i64) -> ToleranceBand {
        ToleranceBand::around(actual, self.registry.threshold())
    }

    /// Classify every prediction against `actual`.
    ///
    /// Matches are returned in submission order. The caller must be the
    /// registry owner; the check happens before any prediction is read.
    ///
    /// # Errors
    /// Returns [`EvaluationError::Unauthorized`] if `caller` is not the owner.
    pub fn evaluate(
        &self,
        actual: i64,
        caller: &SubmitterId,
    ) -> Result<Vec<MatchEvent>, EvaluationError> {
        if caller != self.registry.owner() {
            return Err(EvaluationError::Unauthorized {
                caller: caller.clone(),
            });
        }

        let band = self.band(actual);
        let matches: Vec<MatchEvent> = self
            .registry
            .predictions()
            .filter(|p| band.contains(p.value()))
            .map(MatchEvent::from)
            .collect();

        debug!(
            actual,
            band = %band,
            scanned = self.registry.len(),
            matched = matches.len(),
            "Evaluation complete"
        );

        Ok(matches)
    }
}
