use thiserror::Error;

/// Validation failures for coin metadata and chain parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // ─── Denomination Errors ─────────────────────────────────────────────────
    #[error("invalid denom '{denom}': {reason}")]
    InvalidDenom { denom: String, reason: String },

    #[error("decimals {decimals} exceed maximum {max}")]
    DecimalsTooLarge { decimals: u8, max: u8 },

    #[error("display denom and base denom are both '{0}'")]
    DenomCollision(String),

    // ─── Chain Parameter Errors ──────────────────────────────────────────────
    #[error("chain id must be non-zero")]
    ZeroChainId,

    #[error("fork {fork} enabled while earlier fork {previous} is unset")]
    ForkGap {
        fork: &'static str,
        previous: &'static str,
    },

    #[error("fork {fork} at {at} precedes {previous} at {previous_at}")]
    ForkOutOfOrder {
        fork: &'static str,
        at: u64,
        previous: &'static str,
        previous_at: u64,
    },

    #[error("failed to encode chain parameters: {reason}")]
    Encoding { reason: String },
}
