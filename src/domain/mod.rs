//! Prediction domain: identities, the registry, and evaluation.

mod evaluator;
mod id;
mod prediction;
mod registry;
mod tolerance;

pub use evaluator::Evaluator;
pub use id::SubmitterId;
pub use prediction::{MatchEvent, Prediction, SubmissionEvent};
pub use registry::{Registry, RegistrySnapshot};
pub use tolerance::ToleranceBand;
