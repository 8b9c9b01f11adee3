//! Adapters implementing the ports in [`crate::port`].

mod memory;
mod notifier;
pub mod sqlite;

pub use memory::MemoryStore;
pub use notifier::{LogNotifier, NullNotifier};
pub use sqlite::SqliteRegistryStore;
