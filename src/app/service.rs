//! Prediction service: the registry behind a lock, wired to persistence
//! and notifications.
//!
//! All mutations take the write lock, so submissions are globally
//! serialized. Evaluations take the read lock for the whole scan and can run
//! in parallel with each other, but never observe a half-applied submit.

use std::path::Path;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::config::Config;
use crate::adapter::sqlite::connection::MEMORY_URL;
use crate::adapter::{LogNotifier, SqliteRegistryStore};
use crate::domain::{
    Evaluator, MatchEvent, Prediction, Registry, RegistrySnapshot, SubmissionEvent, SubmitterId,
};
use crate::error::{ConfigError, Error, RegistryError, Result};
use crate::port::{EvaluationSummary, Event, Notifier, NotifierRegistry, RegistryStore};

/// Application façade over the prediction registry.
pub struct PredictionService {
    registry: RwLock<Registry>,
    store: Box<dyn RegistryStore>,
    notifiers: NotifierRegistry,
}

impl PredictionService {
    /// Open the registry held by `store`, creating it if the store is empty.
    ///
    /// # Errors
    /// Returns [`ConfigError::Mismatch`] if the store already holds a
    /// registry with a different owner or threshold, or any store error.
    pub fn open(
        store: Box<dyn RegistryStore>,
        owner: SubmitterId,
        threshold: u64,
    ) -> Result<Self> {
        let registry = match store.load()? {
            Some(snapshot) => {
                check_matches(&snapshot, &owner, threshold)?;
                let registry = Registry::from_snapshot(snapshot)?;
                info!(
                    owner = %registry.owner(),
                    threshold = registry.threshold(),
                    predictions = registry.len(),
                    "Registry restored"
                );
                registry
            }
            None => {
                store.initialize(&owner, threshold)?;
                info!(owner = %owner, threshold, "Registry created");
                Registry::new(owner, threshold)
            }
        };

        Ok(Self {
            registry: RwLock::new(registry),
            store,
            notifiers: NotifierRegistry::new(),
        })
    }

    /// Open the SQLite-backed registry described by `config`, logging events.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or does not match
    /// the configured registry.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = SqliteRegistryStore::open(&config.database.url)?;
        let mut service = Self::open(
            Box::new(store),
            config.registry.owner_id(),
            config.registry.threshold,
        )?;
        service.add_notifier(Box::new(LogNotifier));
        Ok(service)
    }

    /// Load the registry described by `config` without creating it.
    ///
    /// Returns `None` when the database file does not exist yet or holds no
    /// registry header. Nothing is written in either case.
    ///
    /// # Errors
    /// Returns [`ConfigError::Mismatch`] if the persisted owner or threshold
    /// differs from `config`, or any store error.
    pub fn inspect(config: &Config) -> Result<Option<RegistrySnapshot>> {
        let url = &config.database.url;
        if url != MEMORY_URL && !Path::new(url).exists() {
            debug!(database_url = %url, "Registry database does not exist");
            return Ok(None);
        }

        let store = SqliteRegistryStore::open(url)?;
        let Some(snapshot) = store.load()? else {
            return Ok(None);
        };
        check_matches(&snapshot, &config.registry.owner_id(), config.registry.threshold)?;
        Ok(Some(snapshot))
    }

    /// Register a notifier for submission and match events.
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.register(notifier);
    }

    /// Record a prediction.
    ///
    /// The prediction is persisted before it becomes visible in memory; if
    /// the store fails, the registry is left unchanged.
    ///
    /// # Errors
    /// Returns [`RegistryError::AlreadyPredicted`] on resubmission, or a
    /// store error.
    pub fn submit(&self, submitter: SubmitterId, value: i64) -> Result<()> {
        let event = {
            let mut registry = self.registry.write();
            if registry.has_predicted(&submitter) {
                warn!(submitter = %submitter, "Rejected resubmission");
                return Err(RegistryError::AlreadyPredicted { submitter }.into());
            }

            let prediction = Prediction::new(submitter, value, Utc::now());
            if let Err(e) = self.store.record(&prediction) {
                if matches!(e, Error::Registry(RegistryError::AlreadyPredicted { .. })) {
                    warn!(
                        submitter = %prediction.submitter(),
                        "Rejected resubmission recorded by another writer"
                    );
                    self.reload(&mut registry);
                }
                return Err(e);
            }

            let stored = registry.submit_at(
                prediction.submitter().clone(),
                prediction.value(),
                prediction.submitted_at(),
            )?;
            SubmissionEvent::from(stored)
        };

        self.notifiers.notify_all(Event::PredictionSubmitted(event));
        Ok(())
    }

    /// Replace the in-memory registry with the store's current contents.
    ///
    /// Used when the store reveals writes from another service sharing it.
    /// On failure the current registry is kept.
    fn reload(&self, registry: &mut Registry) {
        let snapshot = match self.store.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "Failed to reload registry from store");
                return;
            }
        };
        match Registry::from_snapshot(snapshot) {
            Ok(fresh) => {
                debug!(predictions = fresh.len(), "Registry reloaded from store");
                *registry = fresh;
            }
            Err(e) => warn!(error = %e, "Stored registry is inconsistent"),
        }
    }

    /// Evaluate every prediction against `actual` on behalf of `caller`.
    ///
    /// Each match is forwarded to the notifiers, followed by a summary.
    ///
    /// # Errors
    /// Returns [`EvaluationError::Unauthorized`](crate::error::EvaluationError)
    /// if `caller` is not the owner. Nothing is notified in that case.
    pub fn evaluate(&self, actual: i64, caller: &SubmitterId) -> Result<Vec<MatchEvent>> {
        let (matches, summary) = {
            let registry = self.registry.read();
            let evaluator = Evaluator::new(&registry);
            let matches = match evaluator.evaluate(actual, caller) {
                Ok(matches) => matches,
                Err(e) => {
                    warn!(caller = %caller, "Rejected unauthorized evaluation");
                    return Err(e.into());
                }
            };
            let summary = EvaluationSummary {
                caller: caller.clone(),
                actual,
                band: evaluator.band(actual),
                scanned: registry.len(),
                matched: matches.len(),
            };
            (matches, summary)
        };

        for event in &matches {
            self.notifiers.notify_all(Event::MatchFound(event.clone()));
        }
        self.notifiers
            .notify_all(Event::EvaluationCompleted(summary));

        Ok(matches)
    }

    /// `(submitter, value)` pairs in submission order.
    #[must_use]
    pub fn list_predictions(&self) -> Vec<(SubmitterId, i64)> {
        self.registry
            .read()
            .list_predictions()
            .map(|(id, value)| (id.clone(), value))
            .collect()
    }

    /// Consistent copy of the full registry state.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.read().snapshot()
    }

    /// Submission notifications recorded by the registry, oldest first.
    #[must_use]
    pub fn submissions(&self) -> Vec<SubmissionEvent> {
        self.registry.read().submissions().to_vec()
    }

    #[must_use]
    pub fn owner(&self) -> SubmitterId {
        self.registry.read().owner().clone()
    }

    #[must_use]
    pub fn threshold(&self) -> u64 {
        self.registry.read().threshold()
    }
}

fn check_matches(snapshot: &RegistrySnapshot, owner: &SubmitterId, threshold: u64) -> Result<()> {
    if &snapshot.owner != owner {
        return Err(ConfigError::Mismatch {
            field: "registry.owner",
            configured: owner.to_string(),
            persisted: snapshot.owner.to_string(),
        }
        .into());
    }
    if snapshot.threshold != threshold {
        return Err(ConfigError::Mismatch {
            field: "registry.threshold",
            configured: threshold.to_string(),
            persisted: snapshot.threshold.to_string(),
        }
        .into());
    }
    Ok(())
}
