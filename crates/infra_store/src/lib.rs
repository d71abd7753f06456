//! Storage Infrastructure
//!
//! This crate provides the adapters behind the `ClaimStore` port defined in
//! `domain_claims`. The in-memory adapter keeps every claim behind its own
//! lock, so reviewers working on different claims never wait on each
//! other; only the id indexes are shared.
//!
//! Nothing is persisted: dropping the store drops the data.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{InMemoryClaimStore, StoreConfig};
//!
//! let store = InMemoryClaimStore::new(StoreConfig::default().first_claim_id(3));
//! ```

pub mod config;
pub mod memory;

pub use config::StoreConfig;
pub use memory::InMemoryClaimStore;
