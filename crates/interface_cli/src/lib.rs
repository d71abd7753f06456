//! Command Line Layer
//!
//! Configuration loading, logging setup and the `cmcs-replay` tool, which
//! drives the claims workflow from a JSON script against the in-memory
//! store and reports the resulting claims.
//!
//! # Example
//!
//! ```rust
//! use infra_store::StoreConfig;
//! use interface_cli::{parse_script, Replay};
//!
//! let steps = parse_script(r#"[
//!     { "op": "submit", "claim": {
//!         "lecturer_id": 101, "lecturer_name": "T. Mokoena", "month": "2025-03-01",
//!         "items": [{ "description": "Lecturing", "hours_worked": 5,
//!                     "rate": { "amount": "100", "currency": "ZAR" } }] } },
//!     { "op": "review", "claim": { "submission": 0 }, "role": "coordinator", "outcome": "Approved" }
//! ]"#).unwrap();
//!
//! let mut replay = Replay::new(StoreConfig::default());
//! replay.run(steps).unwrap();
//!
//! let claims = replay.summaries().unwrap();
//! assert_eq!(claims[0].status.as_str(), "Pending Academic Manager Review");
//! ```

pub mod config;
pub mod error;
pub mod replay;
pub mod telemetry;

pub use config::AppConfig;
pub use error::ReplayError;
pub use replay::{parse_script, ClaimRef, ClaimSummary, Replay, Step};
pub use telemetry::init_tracing;
