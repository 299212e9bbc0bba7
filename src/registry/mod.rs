//! Registry abstraction and backends.
//!
//! The trait defines the contract a registry collaborator must implement.
//! The in-memory backend serves embedded use, tests, and as a reference
//! implementation; persistent or replicated registries belong to the host
//! platform and plug in behind the same trait.

mod memory;
mod traits;

pub use memory::InMemoryRegistry;
pub use traits::{Registry, RegistryError};
