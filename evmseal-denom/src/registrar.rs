use evmseal_types::constants::DISPLAY_UNIT_EXPONENT;
use evmseal_types::ChainCoinInfo;

use crate::error::DenomError;
use crate::traits::DenomCatalog;

/// Register the display and base units of `info` and make the base unit the
/// catalog's base.
///
/// Invalid coin info (bad denoms, equal denoms, too many decimals) is rejected
/// before the catalog is touched. "Already registered" outcomes are tolerated
/// so repeated calls with the same coin info still end with the base unit set.
/// Any other catalog error is returned and the base unit is left untouched.
pub fn register_and_set_base<C: DenomCatalog + ?Sized>(
    catalog: &C,
    info: &ChainCoinInfo,
) -> Result<(), DenomError> {
    info.validate()?;
    tolerate_duplicate(catalog.register_unit(&info.display_denom, DISPLAY_UNIT_EXPONENT))?;
    tolerate_duplicate(catalog.register_unit(&info.denom, info.base_exponent()))?;
    catalog.set_base_unit(&info.denom)?;
    tracing::debug!(
        base = %info.denom,
        display = %info.display_denom,
        decimals = info.decimals,
        "registered chain denominations"
    );
    Ok(())
}

fn tolerate_duplicate(result: Result<(), DenomError>) -> Result<(), DenomError> {
    match result {
        Err(e) if e.is_benign() => {
            tracing::debug!("{}", e);
            Ok(())
        }
        other => other,
    }
}
