use evmseal_denom::DenomError;
use evmseal_engine::EngineError;
use evmseal_types::error::ValidationError;
use thiserror::Error;

/// Errors returned by the seal gate entry points.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("unknown chain id: {chain_id}")]
    NotFound { chain_id: u64 },

    #[error("denomination registration failed: {0}")]
    RegistrationConflict(#[from] DenomError),

    #[error("engine rejected configuration: {0}")]
    ApplyFailure(#[from] EngineError),

    #[error("no [[chains]] entries to look up chain id {chain_id} in")]
    NoChainsConfigured { chain_id: u64 },

    #[error("invalid chain data: {0}")]
    Invalid(#[from] ValidationError),

    #[error("seal lock poisoned: {reason}")]
    LockPoisoned { reason: String },

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = GateError::NotFound { chain_id: 42 };
        assert_eq!(err.to_string(), "unknown chain id: 42");
    }

    #[test]
    fn test_denom_error_from() {
        let err: GateError = DenomError::UnknownUnit {
            symbol: "uatom".to_string(),
        }
        .into();
        assert!(matches!(err, GateError::RegistrationConflict(_)));
        assert!(err.to_string().contains("uatom"));
    }

    #[test]
    fn test_engine_error_from() {
        let err: GateError = EngineError::DuplicateActivator { code: 3855 }.into();
        assert!(matches!(err, GateError::ApplyFailure(_)));
    }

    #[test]
    fn test_no_chains_configured_display() {
        let err = GateError::NoChainsConfigured { chain_id: 9001 };
        assert_eq!(
            err.to_string(),
            "no [[chains]] entries to look up chain id 9001 in"
        );
    }

    #[test]
    fn test_validation_error_from() {
        let err: GateError = ValidationError::ZeroChainId.into();
        assert!(matches!(err, GateError::Invalid(_)));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GateError = io_err.into();
        assert!(matches!(err, GateError::IoError(_)));
    }
}
