use evmseal_types::error::ValidationError;
use thiserror::Error;

/// Errors returned by the denomination catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenomError {
    #[error("denom {symbol} already registered with exponent {exponent}")]
    AlreadyRegistered { symbol: String, exponent: i32 },

    #[error("invalid denom: {0}")]
    Invalid(#[from] ValidationError),

    #[error("denom {symbol} is not registered")]
    UnknownUnit { symbol: String },

    #[error("converting {amount} {from} to {to} would drop fractional value")]
    LossyConversion {
        amount: u128,
        from: String,
        to: String,
    },

    #[error("conversion overflow: {amount} {from} to {to}")]
    Overflow {
        amount: u128,
        from: String,
        to: String,
    },

    #[error("catalog lock poisoned: {reason}")]
    LockPoisoned { reason: String },
}

impl DenomError {
    /// Whether the error only reports a symbol that is already in the catalog.
    pub fn is_benign(&self) -> bool {
        matches!(self, DenomError::AlreadyRegistered { .. })
    }
}
