use evmseal_types::{ChainCoinInfo, ChainParameterSet};

use crate::dispatch::FeatureActivatorTable;
use crate::error::EngineError;
use crate::settings::EngineSettings;

/// Builder that collects the pieces of an engine configuration and applies
/// them in one call.
///
/// Borrowed inputs are only held until [`configure`](Self::configure) returns.
pub struct Configurator<'a, E: EngineSettings + ?Sized> {
    engine: &'a E,
    activators: Option<&'a FeatureActivatorTable>,
    chain_parameters: Option<ChainParameterSet>,
    coin_info: Option<&'a ChainCoinInfo>,
}

impl<'a, E: EngineSettings + ?Sized> Configurator<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self {
            engine,
            activators: None,
            chain_parameters: None,
            coin_info: None,
        }
    }

    /// Replaces any previously set table.
    pub fn with_extended_activators(mut self, table: &'a FeatureActivatorTable) -> Self {
        self.activators = Some(table);
        self
    }

    pub fn with_chain_parameters(mut self, params: ChainParameterSet) -> Self {
        self.chain_parameters = Some(params);
        self
    }

    pub fn with_coin_info(mut self, info: &'a ChainCoinInfo) -> Self {
        self.coin_info = Some(info);
        self
    }

    /// Clear the engine's applied configuration so the next
    /// [`configure`](Self::configure) is not rejected. Test setups only.
    pub fn reset_for_test(&self) {
        self.engine.reset_configuration();
    }

    /// Apply activators, chain parameters, then coin info.
    ///
    /// Stops at the first failing step. Steps already applied stay applied.
    pub fn configure(self) -> Result<(), EngineError> {
        let params = self
            .chain_parameters
            .ok_or(EngineError::MissingComponent {
                component: "chain parameters",
            })?;
        let coin_info = self.coin_info.ok_or(EngineError::MissingComponent {
            component: "coin info",
        })?;
        let empty = FeatureActivatorTable::new();
        let activators = self.activators.unwrap_or(&empty);

        let chain_id = params.chain_id;
        self.engine.apply_feature_activators(activators)?;
        self.engine.apply_chain_parameters(params)?;
        self.engine.apply_coin_info(coin_info)?;
        tracing::info!(
            chain_id,
            denom = %coin_info.denom,
            activators = activators.len(),
            "engine configured"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchTable;
    use crate::resolver::resolve;
    use crate::settings::EngineConfig;

    fn enable_custom(table: &mut DispatchTable) {
        table.insert(0xf7, "CUSTOM", 1);
    }

    fn atom() -> ChainCoinInfo {
        ChainCoinInfo::new("uatom", "ATOM", 6)
    }

    #[test]
    fn test_configure_applies_everything() {
        let engine = EngineConfig::new();
        let mut activators = FeatureActivatorTable::new();
        activators.insert(8000, enable_custom);
        let info = atom();

        Configurator::new(&engine)
            .with_extended_activators(&activators)
            .with_chain_parameters(resolve(9001))
            .with_coin_info(&info)
            .configure()
            .unwrap();

        assert!(engine.is_configured().unwrap());
        assert_eq!(engine.chain_parameters().unwrap(), Some(resolve(9001)));
        assert_eq!(engine.coin_info().unwrap(), Some(info));
        assert_eq!(engine.extended_codes().unwrap(), vec![8000]);
    }

    #[test]
    fn test_later_table_replaces_earlier() {
        let engine = EngineConfig::new();
        let mut first = FeatureActivatorTable::new();
        first.insert(8000, enable_custom);
        let mut second = FeatureActivatorTable::new();
        second.insert(8001, enable_custom);
        let info = atom();

        Configurator::new(&engine)
            .with_extended_activators(&first)
            .with_extended_activators(&second)
            .with_chain_parameters(resolve(1))
            .with_coin_info(&info)
            .configure()
            .unwrap();
        assert_eq!(engine.extended_codes().unwrap(), vec![8001]);
    }

    #[test]
    fn test_missing_components_apply_nothing() {
        let engine = EngineConfig::new();
        let info = atom();
        let result = Configurator::new(&engine).with_coin_info(&info).configure();
        assert_eq!(
            result,
            Err(EngineError::MissingComponent {
                component: "chain parameters"
            })
        );
        assert!(engine.extended_codes().unwrap().is_empty());
        assert_eq!(engine.coin_info().unwrap(), None);
    }

    #[test]
    fn test_second_configure_rejected_without_reset() {
        let engine = EngineConfig::new();
        let info = atom();
        Configurator::new(&engine)
            .with_chain_parameters(resolve(1))
            .with_coin_info(&info)
            .configure()
            .unwrap();

        let result = Configurator::new(&engine)
            .with_chain_parameters(resolve(2))
            .with_coin_info(&info)
            .configure();
        assert!(matches!(
            result,
            Err(EngineError::AlreadyConfigured { .. })
        ));
        assert_eq!(engine.chain_parameters().unwrap().map(|p| p.chain_id), Some(1));
    }

    #[test]
    fn test_reset_for_test_allows_reconfigure() {
        let engine = EngineConfig::new();
        let info = atom();
        Configurator::new(&engine)
            .with_chain_parameters(resolve(1))
            .with_coin_info(&info)
            .configure()
            .unwrap();

        let configurator = Configurator::new(&engine);
        configurator.reset_for_test();
        configurator
            .with_chain_parameters(resolve(2))
            .with_coin_info(&info)
            .configure()
            .unwrap();
        assert_eq!(engine.chain_parameters().unwrap().map(|p| p.chain_id), Some(2));
    }

    #[test]
    fn test_failed_step_leaves_earlier_steps_applied() {
        let engine = EngineConfig::new();
        let mut activators = FeatureActivatorTable::new();
        activators.insert(8000, enable_custom);
        let bad_info = ChainCoinInfo::new("uatom", "uatom", 6);

        let result = Configurator::new(&engine)
            .with_extended_activators(&activators)
            .with_chain_parameters(resolve(7))
            .with_coin_info(&bad_info)
            .configure();
        assert!(matches!(result, Err(EngineError::InvalidCoinInfo(_))));
        assert_eq!(engine.extended_codes().unwrap(), vec![8000]);
        assert_eq!(engine.chain_parameters().unwrap().map(|p| p.chain_id), Some(7));
        assert_eq!(engine.coin_info().unwrap(), None);
    }
}
