use std::sync::{Arc, PoisonError, RwLock};

use evmseal_types::constants::BUILTIN_ACTIVATOR_CODES;
use evmseal_types::{ChainCoinInfo, ChainParameterSet};

use crate::dispatch::{builtin_activators, DispatchTable, FeatureActivator, FeatureActivatorTable};
use crate::error::EngineError;

/// Global configuration setters of the execution engine.
///
/// Each setter accepts one application; a second one fails with
/// [`EngineError::AlreadyConfigured`] until [`reset_configuration`](Self::reset_configuration).
pub trait EngineSettings: Send + Sync {
    fn apply_chain_parameters(&self, params: ChainParameterSet) -> Result<(), EngineError>;
    fn apply_feature_activators(&self, table: &FeatureActivatorTable) -> Result<(), EngineError>;
    fn apply_coin_info(&self, info: &ChainCoinInfo) -> Result<(), EngineError>;
    fn reset_configuration(&self);
}

impl<E: EngineSettings + ?Sized> EngineSettings for Arc<E> {
    fn apply_chain_parameters(&self, params: ChainParameterSet) -> Result<(), EngineError> {
        (**self).apply_chain_parameters(params)
    }

    fn apply_feature_activators(&self, table: &FeatureActivatorTable) -> Result<(), EngineError> {
        (**self).apply_feature_activators(table)
    }

    fn apply_coin_info(&self, info: &ChainCoinInfo) -> Result<(), EngineError> {
        (**self).apply_coin_info(info)
    }

    fn reset_configuration(&self) {
        (**self).reset_configuration()
    }
}

#[derive(Debug, Default)]
struct EngineState {
    chain_parameters: Option<ChainParameterSet>,
    extended_activators: Option<FeatureActivatorTable>,
    coin_info: Option<ChainCoinInfo>,
}

/// The engine's global configuration cell.
#[derive(Debug, Default)]
pub struct EngineConfig {
    state: RwLock<EngineState>,
}

fn poisoned<E: std::fmt::Display>(e: E) -> EngineError {
    EngineError::LockPoisoned {
        reason: e.to_string(),
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain_parameters(&self) -> Result<Option<ChainParameterSet>, EngineError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.chain_parameters.clone())
    }

    pub fn coin_info(&self) -> Result<Option<ChainCoinInfo>, EngineError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.coin_info.clone())
    }

    /// Codes of the extended activators applied to the engine.
    pub fn extended_codes(&self) -> Result<Vec<i32>, EngineError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .extended_activators
            .as_ref()
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default())
    }

    /// True once chain parameters, activators, and coin info are all applied.
    pub fn is_configured(&self) -> Result<bool, EngineError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.chain_parameters.is_some()
            && state.extended_activators.is_some()
            && state.coin_info.is_some())
    }

    /// Look up a built-in or extended activator.
    pub fn activator(&self, code: i32) -> Result<Option<FeatureActivator>, EngineError> {
        if let Some(activator) = builtin_activators().get(&code) {
            return Ok(Some(*activator));
        }
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .extended_activators
            .as_ref()
            .and_then(|table| table.get(&code).copied()))
    }

    /// Build a dispatch table with the given activators enabled, in order.
    pub fn dispatch_table(&self, codes: &[i32]) -> Result<DispatchTable, EngineError> {
        let mut table = DispatchTable::new();
        for &code in codes {
            let activate = self
                .activator(code)?
                .ok_or(EngineError::UnknownActivator { code })?;
            activate(&mut table);
        }
        Ok(table)
    }
}

impl EngineSettings for EngineConfig {
    fn apply_chain_parameters(&self, params: ChainParameterSet) -> Result<(), EngineError> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.chain_parameters.is_some() {
            return Err(EngineError::AlreadyConfigured {
                component: "chain parameters",
            });
        }
        params
            .check_fork_order()
            .map_err(EngineError::InvalidChainParameters)?;
        state.chain_parameters = Some(params);
        Ok(())
    }

    fn apply_feature_activators(&self, table: &FeatureActivatorTable) -> Result<(), EngineError> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.extended_activators.is_some() {
            return Err(EngineError::AlreadyConfigured {
                component: "feature activators",
            });
        }
        if let Some(&code) = table
            .keys()
            .find(|code| BUILTIN_ACTIVATOR_CODES.contains(*code))
        {
            return Err(EngineError::DuplicateActivator { code });
        }
        state.extended_activators = Some(table.clone());
        Ok(())
    }

    fn apply_coin_info(&self, info: &ChainCoinInfo) -> Result<(), EngineError> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.coin_info.is_some() {
            return Err(EngineError::AlreadyConfigured {
                component: "coin info",
            });
        }
        info.validate().map_err(EngineError::InvalidCoinInfo)?;
        state.coin_info = Some(info.clone());
        Ok(())
    }

    fn reset_configuration(&self) {
        tracing::warn!("resetting engine configuration");
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = EngineState::default();
    }
}
