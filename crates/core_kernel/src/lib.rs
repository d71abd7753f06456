//! Core Kernel - Foundational types shared by the claims crates
//!
//! This crate provides the building blocks used across the workspace:
//! - Money types with precise decimal arithmetic
//! - Sequence-backed identifiers for claims, documents and lecturers
//! - The port error type shared by every store adapter

pub mod money;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{ClaimId, DocumentId, LecturerId, IdParseError};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
