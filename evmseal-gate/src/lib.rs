//! Apply-once configuration gate for an EVM execution layer.
//!
//! [`SealGate`](gate::SealGate) binds chain parameters, feature activators,
//! and native-coin metadata into the engine's global configuration and
//! registers the chain's denominations. The [`global`] module exposes the
//! process-wide instance.

pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod global;

pub use error::GateError;
pub use gate::{SealGate, SealState};
