//! Execution-engine side of the evmseal configuration gate.
//!
//! Holds the engine's global configuration cell, the operation-dispatch
//! table and its feature activators, the chain parameter resolver, and the
//! [`Configurator`](configurator::Configurator) that applies a configuration.

pub mod configurator;
pub mod dispatch;
pub mod error;
pub mod resolver;
pub mod settings;

pub use configurator::Configurator;
pub use dispatch::{DispatchTable, FeatureActivator, FeatureActivatorTable};
pub use error::EngineError;
pub use resolver::resolve;
pub use settings::{EngineConfig, EngineSettings};
