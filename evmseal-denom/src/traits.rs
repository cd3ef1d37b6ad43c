use std::sync::Arc;

use crate::error::DenomError;

/// Registered units as `(symbol, exponent)` pairs.
pub type UnitEntries = Vec<(String, i32)>;

/// Process-wide registry of denomination units.
///
/// A unit's exponent is the power of ten of one unit measured in whole coins:
/// a display unit sits at `0`, a base unit with 6 fractional digits at `-6`.
pub trait DenomCatalog: Send + Sync {
    /// Register `symbol` at `exponent`.
    ///
    /// A new symbol is inserted. An existing symbol is overwritten only when
    /// `exponent` is numerically smaller (finer); otherwise the entry is kept
    /// and [`DenomError::AlreadyRegistered`] is returned.
    fn register_unit(&self, symbol: &str, exponent: i32) -> Result<(), DenomError>;

    fn exponent(&self, symbol: &str) -> Result<Option<i32>, DenomError>;

    /// Designate `symbol` as the base unit. The symbol must be registered.
    fn set_base_unit(&self, symbol: &str) -> Result<(), DenomError>;

    fn base_unit(&self) -> Result<Option<String>, DenomError>;

    fn units(&self) -> Result<UnitEntries, DenomError>;

    /// Number of fractional digits `symbol` carries relative to a whole coin.
    fn fractional_digits(&self, symbol: &str) -> Result<Option<i32>, DenomError> {
        Ok(self.exponent(symbol)?.map(|e| -e))
    }

    /// Convert an integer `amount` of `from` units into `to` units.
    fn convert(&self, amount: u128, from: &str, to: &str) -> Result<u128, DenomError> {
        let from_exp = self.exponent(from)?.ok_or_else(|| DenomError::UnknownUnit {
            symbol: from.to_string(),
        })?;
        let to_exp = self.exponent(to)?.ok_or_else(|| DenomError::UnknownUnit {
            symbol: to.to_string(),
        })?;
        let overflow = || DenomError::Overflow {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        };
        let lossy = || DenomError::LossyConversion {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        };

        let shift = i64::from(from_exp) - i64::from(to_exp);
        let magnitude = u32::try_from(shift.unsigned_abs()).map_err(|_| overflow())?;
        let factor = 10u128.checked_pow(magnitude);
        if shift >= 0 {
            factor
                .and_then(|f| amount.checked_mul(f))
                .ok_or_else(overflow)
        } else {
            match factor {
                Some(f) if amount % f == 0 => Ok(amount / f),
                None if amount == 0 => Ok(0),
                _ => Err(lossy()),
            }
        }
    }
}

/// Blanket implementation of DenomCatalog for `Arc<C>` so a catalog can be
/// shared between a gate and the code that reads it.
impl<C: DenomCatalog + ?Sized> DenomCatalog for Arc<C> {
    fn register_unit(&self, symbol: &str, exponent: i32) -> Result<(), DenomError> {
        (**self).register_unit(symbol, exponent)
    }

    fn exponent(&self, symbol: &str) -> Result<Option<i32>, DenomError> {
        (**self).exponent(symbol)
    }

    fn set_base_unit(&self, symbol: &str) -> Result<(), DenomError> {
        (**self).set_base_unit(symbol)
    }

    fn base_unit(&self) -> Result<Option<String>, DenomError> {
        (**self).base_unit()
    }

    fn units(&self) -> Result<UnitEntries, DenomError> {
        (**self).units()
    }
}
