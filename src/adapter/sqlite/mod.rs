//! SQLite persistence adapter.
//!
//! Provides a SQLite-backed [`RegistryStore`](crate::port::RegistryStore)
//! using Diesel ORM with embedded migrations.

pub mod connection;
pub mod model;
pub mod schema;
mod store;

pub use store::SqliteRegistryStore;
