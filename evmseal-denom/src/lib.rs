//! Denomination catalog for the evmseal configuration gate.
//!
//! Provides a [`DenomCatalog`](traits::DenomCatalog) trait with an in-memory
//! backend, plus the registrar that installs a chain's display and base units.

pub mod error;
pub mod memory;
pub mod registrar;
pub mod traits;

pub use error::DenomError;
pub use memory::MemoryCatalog;
pub use registrar::register_and_set_base;
pub use traits::DenomCatalog;
