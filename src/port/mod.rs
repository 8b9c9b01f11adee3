//! Port definitions between the application core and its adapters.

mod notifier;
mod store;

pub use notifier::{EvaluationSummary, Event, Notifier, NotifierRegistry};
pub use store::RegistryStore;
