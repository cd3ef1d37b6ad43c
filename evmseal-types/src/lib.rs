//! Shared type definitions for the evmseal configuration gate.
//!
//! Coin metadata, the execution-engine parameter set, and the constants both
//! the denomination catalog and the engine agree on.

pub mod coin;
pub mod constants;
pub mod error;
pub mod params;

pub use coin::ChainCoinInfo;
pub use params::{ChainParameterSet, Rules};

#[cfg(test)]
mod tests {
    use borsh::{BorshDeserialize, BorshSerialize};

    /// Helper: borsh round-trip test.
    fn borsh_roundtrip<T: BorshSerialize + BorshDeserialize + PartialEq + std::fmt::Debug>(
        value: &T,
    ) {
        let encoded = borsh::to_vec(value).expect("borsh serialize failed");
        let decoded = T::try_from_slice(&encoded).expect("borsh deserialize failed");
        assert_eq!(*value, decoded);
    }

    #[test]
    fn test_chain_parameter_set_roundtrip() {
        let mut params = crate::ChainParameterSet::all_forks_at_genesis(9001);
        params.osaka_time = Some(1_700_000_000);
        borsh_roundtrip(&params);
    }

    #[test]
    fn test_coin_info_roundtrip() {
        borsh_roundtrip(&crate::ChainCoinInfo::new("uatom", "ATOM", 6));
    }
}
