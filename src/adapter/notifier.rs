//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the built-in backends.

use tracing::info;

use crate::port::{Event, Notifier};

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        match event {
            Event::PredictionSubmitted(e) => {
                info!(submitter = %e.submitter, value = e.value, "Prediction submitted");
            }
            Event::MatchFound(e) => {
                info!(submitter = %e.submitter, value = e.value, "Match found");
            }
            Event::EvaluationCompleted(e) => {
                info!(
                    caller = %e.caller,
                    actual = e.actual,
                    band = %e.band,
                    scanned = e.scanned,
                    matched = e.matched,
                    "Evaluation completed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchEvent, SubmitterId};
    use crate::port::NotifierRegistry;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingNotifier {
        count: Arc<AtomicUsize>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, _event: Event) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn match_event() -> Event {
        Event::MatchFound(MatchEvent::new(SubmitterId::from("u1"), 7))
    }

    #[test]
    fn registry_notifies_every_notifier() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut registry = NotifierRegistry::new();

        registry.register(Box::new(CountingNotifier {
            count: count.clone(),
        }));
        registry.register(Box::new(CountingNotifier {
            count: count.clone(),
        }));

        registry.notify_all(match_event());

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn null_and_log_notifiers_accept_events() {
        NullNotifier.notify(match_event());
        LogNotifier.notify(match_event());
    }

    #[test]
    fn registry_len_and_is_empty() {
        let mut registry = NotifierRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register(Box::new(NullNotifier));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }
}
