use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DECIMALS, MAX_DENOM_LEN, MIN_DENOM_LEN};
use crate::error::ValidationError;

/// Native-coin metadata for a chain.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct ChainCoinInfo {
    /// Smallest accounting unit, e.g. `uatom`.
    pub denom: String,
    /// Human-facing whole-coin unit, e.g. `ATOM`.
    pub display_denom: String,
    /// Fractional digits of `denom` relative to `display_denom`.
    pub decimals: u8,
}

impl ChainCoinInfo {
    pub fn new(denom: impl Into<String>, display_denom: impl Into<String>, decimals: u8) -> Self {
        Self {
            denom: denom.into(),
            display_denom: display_denom.into(),
            decimals,
        }
    }

    /// Precision exponent of the base unit relative to the display unit.
    pub fn base_exponent(&self) -> i32 {
        -i32::from(self.decimals)
    }

    /// Check symbols and decimals before the coin info is handed to the engine.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_denom(&self.denom)?;
        validate_denom(&self.display_denom)?;
        if self.denom == self.display_denom {
            return Err(ValidationError::DenomCollision(self.denom.clone()));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ValidationError::DecimalsTooLarge {
                decimals: self.decimals,
                max: MAX_DECIMALS,
            });
        }
        Ok(())
    }
}

/// Validate a denom: 3-128 chars, a leading ASCII letter, then alphanumerics or `/:._-`.
pub fn validate_denom(denom: &str) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidDenom {
        denom: denom.to_string(),
        reason,
    };
    if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
        return Err(invalid(format!(
            "denom must be {MIN_DENOM_LEN}-{MAX_DENOM_LEN} characters, got {}",
            denom.len()
        )));
    }
    let mut chars = denom.chars();
    if let Some(first) = chars.next() {
        if !first.is_ascii_alphabetic() {
            return Err(invalid(format!("denom must start with a letter, found '{first}'")));
        }
    }
    for c in chars {
        if !c.is_ascii_alphanumeric() && !matches!(c, '/' | ':' | '.' | '_' | '-') {
            return Err(invalid(format!("unexpected character '{c}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_denom_valid() {
        assert!(validate_denom("uatom").is_ok());
        assert!(validate_denom("ATOM").is_ok());
        assert!(validate_denom("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2").is_ok());
        assert!(validate_denom("factory/cosmos1abc/sub.unit_x-y").is_ok());
    }

    #[test]
    fn test_validate_denom_length() {
        assert!(validate_denom("ab").is_err());
        assert!(validate_denom("").is_err());
        assert!(validate_denom(&"a".repeat(MAX_DENOM_LEN)).is_ok());
        assert!(validate_denom(&"a".repeat(MAX_DENOM_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_denom_leading_char() {
        assert!(matches!(
            validate_denom("1atom"),
            Err(ValidationError::InvalidDenom { .. })
        ));
        assert!(validate_denom("/atom").is_err());
    }

    #[test]
    fn test_validate_denom_bad_chars() {
        assert!(validate_denom("at om").is_err());
        assert!(validate_denom("atom$").is_err());
    }

    #[test]
    fn test_base_exponent() {
        let info = ChainCoinInfo::new("uatom", "ATOM", 6);
        assert_eq!(info.base_exponent(), -6);
        let info = ChainCoinInfo::new("aevmos", "EVMOS", 18);
        assert_eq!(info.base_exponent(), -18);
    }

    #[test]
    fn test_coin_info_validate() {
        assert!(ChainCoinInfo::new("uatom", "ATOM", 6).validate().is_ok());
        assert_eq!(
            ChainCoinInfo::new("uatom", "uatom", 6).validate(),
            Err(ValidationError::DenomCollision("uatom".to_string()))
        );
        assert_eq!(
            ChainCoinInfo::new("uatom", "ATOM", 19).validate(),
            Err(ValidationError::DecimalsTooLarge {
                decimals: 19,
                max: MAX_DECIMALS
            })
        );
        assert!(ChainCoinInfo::new("u", "ATOM", 6).validate().is_err());
    }

    #[test]
    fn test_coin_info_json_field_names() {
        let info = ChainCoinInfo::new("uatom", "ATOM", 6);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["denom"], "uatom");
        assert_eq!(json["display_denom"], "ATOM");
        assert_eq!(json["decimals"], 6);
    }
}
