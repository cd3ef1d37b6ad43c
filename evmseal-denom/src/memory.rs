use std::collections::BTreeMap;
use std::sync::RwLock;

use evmseal_types::coin::validate_denom;

use crate::error::DenomError;
use crate::traits::{DenomCatalog, UnitEntries};

#[derive(Debug, Default)]
struct CatalogState {
    units: BTreeMap<String, i32>,
    base: Option<String>,
}

/// In-memory denomination catalog.
/// Units and the base pointer share one lock so the base always names a registered unit.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    state: RwLock<CatalogState>,
}

impl MemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> DenomError {
    DenomError::LockPoisoned {
        reason: e.to_string(),
    }
}

impl DenomCatalog for MemoryCatalog {
    fn register_unit(&self, symbol: &str, exponent: i32) -> Result<(), DenomError> {
        validate_denom(symbol)?;
        let mut state = self.state.write().map_err(poisoned)?;
        match state.units.get(symbol).copied() {
            Some(existing) if exponent < existing => {
                tracing::debug!(symbol, existing, exponent, "tightening unit precision");
                state.units.insert(symbol.to_string(), exponent);
                Ok(())
            }
            Some(existing) => Err(DenomError::AlreadyRegistered {
                symbol: symbol.to_string(),
                exponent: existing,
            }),
            None => {
                state.units.insert(symbol.to_string(), exponent);
                Ok(())
            }
        }
    }

    fn exponent(&self, symbol: &str) -> Result<Option<i32>, DenomError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.units.get(symbol).copied())
    }

    fn set_base_unit(&self, symbol: &str) -> Result<(), DenomError> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.units.contains_key(symbol) {
            return Err(DenomError::UnknownUnit {
                symbol: symbol.to_string(),
            });
        }
        state.base = Some(symbol.to_string());
        Ok(())
    }

    fn base_unit(&self) -> Result<Option<String>, DenomError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.base.clone())
    }

    fn units(&self) -> Result<UnitEntries, DenomError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .units
            .iter()
            .map(|(symbol, exponent)| (symbol.clone(), *exponent))
            .collect())
    }
}
