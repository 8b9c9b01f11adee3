//! Notifier port for registry events.
//!
//! This module defines the trait for sending notifications about
//! accepted predictions, matches, and completed evaluations.

use serde::Serialize;

use crate::domain::{MatchEvent, SubmissionEvent, SubmitterId, ToleranceBand};

/// Events that can trigger notifications.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A prediction was accepted.
    PredictionSubmitted(SubmissionEvent),
    /// A prediction matched the actual value.
    MatchFound(MatchEvent),
    /// An evaluation finished scanning the registry.
    EvaluationCompleted(EvaluationSummary),
}

/// Summary of one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationSummary {
    /// The identity that triggered the evaluation.
    pub caller: SubmitterId,
    /// The observed value predictions were compared against.
    pub actual: i64,
    /// The accepted band around `actual`.
    pub band: ToleranceBand,
    /// Number of predictions scanned.
    pub scanned: usize,
    /// Number of predictions that matched.
    pub matched: usize,
}

/// Trait for notification handlers.
///
/// Implementations must be thread-safe (`Send + Sync`) and should return
/// quickly; `notify` is called while no registry lock is held, but callers
/// still wait on it.
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}
