//! Hindsight - prediction registration and tolerance matching.
//!
//! Submitters register one integer prediction each against a future
//! real-world value. Once the value is known, the registry owner evaluates
//! every prediction and receives a match event for each one within the
//! configured threshold.
//!
//! # Modules
//!
//! - [`domain`] - Submitter identities, the [`Registry`](domain::Registry),
//!   the [`Evaluator`](domain::Evaluator) and tolerance bands
//! - [`port`] - Notifier and store traits
//! - [`adapter`] - Logging notifier, in-memory and SQLite stores
//! - [`app`] - Configuration and the lock-guarded
//!   [`PredictionService`](app::PredictionService)
//! - [`cli`] - Command-line definitions and handlers
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use hindsight::domain::{Evaluator, Registry, SubmitterId};
//!
//! let owner = SubmitterId::from("operator");
//! let mut registry = Registry::new(owner.clone(), 10);
//! registry.submit(SubmitterId::from("alice"), 100).unwrap();
//! registry.submit(SubmitterId::from("bob"), 80).unwrap();
//!
//! let matches = Evaluator::new(&registry).evaluate(105, &owner).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].submitter.as_str(), "alice");
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
