//! Platform-agnostic storage adapters for frontends without their own store.

#[cfg(feature = "memory-store")]
mod memory_store;

#[cfg(feature = "memory-store")]
pub use memory_store::InMemoryCredentialStore;
