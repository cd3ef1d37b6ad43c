use evmseal_types::error::ValidationError;
use thiserror::Error;

/// Errors raised while applying configuration to the execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("engine {component} already configured")]
    AlreadyConfigured { component: &'static str },

    #[error("configurator is missing {component}")]
    MissingComponent { component: &'static str },

    #[error("invalid chain parameters: {0}")]
    InvalidChainParameters(ValidationError),

    #[error("invalid coin info: {0}")]
    InvalidCoinInfo(ValidationError),

    #[error("activator {code} is already built into the engine")]
    DuplicateActivator { code: i32 },

    #[error("no activator registered for code {code}")]
    UnknownActivator { code: i32 },

    #[error("engine lock poisoned: {reason}")]
    LockPoisoned { reason: String },
}
