use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use evmseal_denom::{register_and_set_base, DenomCatalog};
use evmseal_engine::{resolve, Configurator, EngineSettings, FeatureActivatorTable};
use evmseal_types::ChainCoinInfo;

use crate::error::GateError;

/// Whether the non-reset entry points have already applied a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SealState {
    Unsealed,
    Sealed,
}

/// Apply-once gate in front of the denomination catalog and the engine.
///
/// `configure_from_map` and `configure_dynamic` apply a configuration at most
/// once; after the first success they return `Ok(())` without doing anything.
/// The `*_with_reset` variants never look at the seal and may re-apply as
/// often as a test harness needs.
///
/// Every entry point holds the seal lock for its whole duration, so
/// concurrent callers are serialized.
pub struct SealGate<C, E> {
    catalog: C,
    engine: E,
    state: Mutex<SealState>,
}

fn lookup(
    chains: &HashMap<u64, ChainCoinInfo>,
    chain_id: u64,
) -> Result<&ChainCoinInfo, GateError> {
    chains.get(&chain_id).ok_or(GateError::NotFound { chain_id })
}

impl<C: DenomCatalog, E: EngineSettings> SealGate<C, E> {
    pub fn new(catalog: C, engine: E) -> Self {
        Self {
            catalog,
            engine,
            state: Mutex::new(SealState::Unsealed),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn state(&self) -> Result<SealState, GateError> {
        Ok(*self.lock()?)
    }

    pub fn is_sealed(&self) -> Result<bool, GateError> {
        Ok(self.state()? == SealState::Sealed)
    }

    /// Configure from a chain id to coin info map.
    ///
    /// A sealed gate returns immediately, before the map is consulted.
    pub fn configure_from_map(
        &self,
        chain_id: u64,
        chains: &HashMap<u64, ChainCoinInfo>,
        activators: &FeatureActivatorTable,
    ) -> Result<(), GateError> {
        let mut state = self.lock()?;
        if *state == SealState::Sealed {
            tracing::debug!(chain_id, "gate sealed, skipping configuration");
            return Ok(());
        }
        let coin_info = lookup(chains, chain_id)?;
        self.apply(chain_id, coin_info, activators, false)?;
        seal(&mut state, chain_id);
        Ok(())
    }

    /// Map lookup followed by [`configure_dynamic_with_reset`](Self::configure_dynamic_with_reset).
    pub fn configure_from_map_with_reset(
        &self,
        chain_id: u64,
        chains: &HashMap<u64, ChainCoinInfo>,
        activators: &FeatureActivatorTable,
        with_reset: bool,
    ) -> Result<(), GateError> {
        let coin_info = lookup(chains, chain_id)?;
        self.configure_dynamic_with_reset(chain_id, coin_info, activators, with_reset)
    }

    pub fn configure_dynamic(
        &self,
        chain_id: u64,
        coin_info: &ChainCoinInfo,
        activators: &FeatureActivatorTable,
    ) -> Result<(), GateError> {
        let mut state = self.lock()?;
        if *state == SealState::Sealed {
            tracing::debug!(chain_id, "gate sealed, skipping configuration");
            return Ok(());
        }
        self.apply(chain_id, coin_info, activators, false)?;
        seal(&mut state, chain_id);
        Ok(())
    }

    /// Register denominations and configure the engine, optionally clearing
    /// its previous configuration first. Neither reads nor sets the seal.
    pub fn configure_dynamic_with_reset(
        &self,
        chain_id: u64,
        coin_info: &ChainCoinInfo,
        activators: &FeatureActivatorTable,
        with_reset: bool,
    ) -> Result<(), GateError> {
        let _serialized = self.lock()?;
        self.apply(chain_id, coin_info, activators, with_reset)
    }

    fn apply(
        &self,
        chain_id: u64,
        coin_info: &ChainCoinInfo,
        activators: &FeatureActivatorTable,
        with_reset: bool,
    ) -> Result<(), GateError> {
        register_and_set_base(&self.catalog, coin_info)?;

        let params = resolve(chain_id);
        let configurator = Configurator::new(&self.engine);
        if with_reset {
            configurator.reset_for_test();
        }
        configurator
            .with_extended_activators(activators)
            .with_chain_parameters(params)
            .with_coin_info(coin_info)
            .configure()?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, SealState>, GateError> {
        self.state.lock().map_err(|e| GateError::LockPoisoned {
            reason: e.to_string(),
        })
    }
}

fn seal(state: &mut SealState, chain_id: u64) {
    *state = SealState::Sealed;
    tracing::info!(chain_id, "chain configuration sealed");
}
