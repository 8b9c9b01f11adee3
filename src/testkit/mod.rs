//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for submitters, registries, and services.
//! - [`notifier`] - A [`Notifier`](crate::port::Notifier) that records events.

pub mod domain;
pub mod notifier;
