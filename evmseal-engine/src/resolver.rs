use evmseal_types::constants::DEFAULT_EVM_CHAIN_ID;
use evmseal_types::ChainParameterSet;

/// Derive the engine parameter set for `chain_id`.
///
/// Every chain runs with all forks active from genesis; chain id 0 maps to
/// [`DEFAULT_EVM_CHAIN_ID`]. Never fails.
pub fn resolve(chain_id: u64) -> ChainParameterSet {
    let chain_id = if chain_id == 0 {
        DEFAULT_EVM_CHAIN_ID
    } else {
        chain_id
    };
    ChainParameterSet::all_forks_at_genesis(chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_keeps_chain_id() {
        assert_eq!(resolve(9001).chain_id, 9001);
    }

    #[test]
    fn test_resolve_zero_uses_default() {
        assert_eq!(resolve(0).chain_id, DEFAULT_EVM_CHAIN_ID);
        assert_eq!(resolve(0), resolve(DEFAULT_EVM_CHAIN_ID));
    }

    #[test]
    fn test_resolved_schedule_is_valid() {
        assert!(resolve(1).check_fork_order().is_ok());
        assert!(resolve(0).check_fork_order().is_ok());
        assert!(resolve(u64::MAX).check_fork_order().is_ok());
    }

    #[test]
    fn test_resolved_rules_at_genesis() {
        let rules = resolve(9001).rules(0, 0);
        assert!(rules.is_london);
        assert!(rules.is_cancun);
        assert!(rules.is_prague);
        assert!(!rules.is_osaka);
    }

    proptest! {
        #[test]
        fn prop_resolve_is_deterministic(chain_id in any::<u64>()) {
            let first = resolve(chain_id);
            let second = resolve(chain_id);
            prop_assert_eq!(first.fingerprint(), second.fingerprint());
            prop_assert_eq!(first, second);
        }
    }
}
