//! Storage layer abstraction trait definition

mod credential_repository;
mod duplicate_lookup;

pub use credential_repository::CredentialRepository;
pub use duplicate_lookup::DuplicateLookup;
