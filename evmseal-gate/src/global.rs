//! Process-wide gate shared by everything in the binary.

use std::collections::HashMap;
use std::sync::OnceLock;

use evmseal_denom::MemoryCatalog;
use evmseal_engine::{EngineConfig, FeatureActivatorTable};
use evmseal_types::ChainCoinInfo;

use crate::error::GateError;
use crate::gate::SealGate;

pub type ProcessGate = SealGate<MemoryCatalog, EngineConfig>;

/// App option setter keyed by chain id only (coin info comes from a bound map).
pub type ChainOptionsFn = Box<dyn Fn(u64) -> Result<(), GateError> + Send + Sync>;

/// App option setter receiving the chain's coin info directly.
pub type CoinOptionsFn = Box<dyn Fn(u64, &ChainCoinInfo) -> Result<(), GateError> + Send + Sync>;

static PROCESS_GATE: OnceLock<ProcessGate> = OnceLock::new();

/// The process gate, created empty and unsealed on first use.
pub fn global() -> &'static ProcessGate {
    PROCESS_GATE.get_or_init(|| {
        tracing::debug!("initializing process seal gate");
        SealGate::new(MemoryCatalog::new(), EngineConfig::new())
    })
}

pub fn configure_from_map(
    chain_id: u64,
    chains: &HashMap<u64, ChainCoinInfo>,
    activators: &FeatureActivatorTable,
) -> Result<(), GateError> {
    global().configure_from_map(chain_id, chains, activators)
}

pub fn configure_from_map_with_reset(
    chain_id: u64,
    chains: &HashMap<u64, ChainCoinInfo>,
    activators: &FeatureActivatorTable,
    with_reset: bool,
) -> Result<(), GateError> {
    global().configure_from_map_with_reset(chain_id, chains, activators, with_reset)
}

pub fn configure_dynamic(
    chain_id: u64,
    coin_info: &ChainCoinInfo,
    activators: &FeatureActivatorTable,
) -> Result<(), GateError> {
    global().configure_dynamic(chain_id, coin_info, activators)
}

pub fn configure_dynamic_with_reset(
    chain_id: u64,
    coin_info: &ChainCoinInfo,
    activators: &FeatureActivatorTable,
    with_reset: bool,
) -> Result<(), GateError> {
    global().configure_dynamic_with_reset(chain_id, coin_info, activators, with_reset)
}

/// Bind a chain map and activator table into a setter for app construction.
pub fn legacy_options_fn(
    chains: HashMap<u64, ChainCoinInfo>,
    activators: FeatureActivatorTable,
) -> ChainOptionsFn {
    Box::new(move |chain_id| configure_from_map(chain_id, &chains, &activators))
}

/// Bind an activator table into a setter that takes coin info per call.
pub fn dynamic_options_fn(activators: FeatureActivatorTable) -> CoinOptionsFn {
    Box::new(move |chain_id: u64, coin_info: &ChainCoinInfo| {
        configure_dynamic(chain_id, coin_info, &activators)
    })
}
