use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Rule-activation schedule for the execution engine.
///
/// Block-numbered forks activate at a height, timestamp forks at a block time.
/// `None` means the fork is not scheduled.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct ChainParameterSet {
    pub chain_id: u64,
    pub homestead_block: Option<u64>,
    pub eip150_block: Option<u64>,
    pub eip155_block: Option<u64>,
    pub eip158_block: Option<u64>,
    pub byzantium_block: Option<u64>,
    pub constantinople_block: Option<u64>,
    pub petersburg_block: Option<u64>,
    pub istanbul_block: Option<u64>,
    pub muir_glacier_block: Option<u64>,
    pub berlin_block: Option<u64>,
    pub london_block: Option<u64>,
    pub arrow_glacier_block: Option<u64>,
    pub gray_glacier_block: Option<u64>,
    pub merge_netsplit_block: Option<u64>,
    pub shanghai_time: Option<u64>,
    pub cancun_time: Option<u64>,
    pub prague_time: Option<u64>,
    pub osaka_time: Option<u64>,
}

/// Flags derived from a [`ChainParameterSet`] at a given height and time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub chain_id: u64,
    pub is_homestead: bool,
    pub is_eip150: bool,
    pub is_eip155: bool,
    pub is_eip158: bool,
    pub is_byzantium: bool,
    pub is_constantinople: bool,
    pub is_petersburg: bool,
    pub is_istanbul: bool,
    pub is_berlin: bool,
    pub is_london: bool,
    pub is_merge: bool,
    pub is_shanghai: bool,
    pub is_cancun: bool,
    pub is_prague: bool,
    pub is_osaka: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ForkKind {
    Block,
    Time,
}

struct Fork {
    name: &'static str,
    at: Option<u64>,
    kind: ForkKind,
    optional: bool,
}

fn reached(fork: Option<u64>, head: u64) -> bool {
    matches!(fork, Some(at) if at <= head)
}

impl ChainParameterSet {
    /// A parameter set with every fork active from genesis.
    pub fn all_forks_at_genesis(chain_id: u64) -> Self {
        Self {
            chain_id,
            homestead_block: Some(0),
            eip150_block: Some(0),
            eip155_block: Some(0),
            eip158_block: Some(0),
            byzantium_block: Some(0),
            constantinople_block: Some(0),
            petersburg_block: Some(0),
            istanbul_block: Some(0),
            muir_glacier_block: Some(0),
            berlin_block: Some(0),
            london_block: Some(0),
            arrow_glacier_block: Some(0),
            gray_glacier_block: Some(0),
            merge_netsplit_block: Some(0),
            shanghai_time: Some(0),
            cancun_time: Some(0),
            prague_time: Some(0),
            osaka_time: None,
        }
    }

    fn forks(&self) -> [Fork; 18] {
        use ForkKind::{Block, Time};
        let f = |name, at, kind, optional| Fork {
            name,
            at,
            kind,
            optional,
        };
        [
            f("homestead", self.homestead_block, Block, false),
            f("eip150", self.eip150_block, Block, false),
            f("eip155", self.eip155_block, Block, false),
            f("eip158", self.eip158_block, Block, false),
            f("byzantium", self.byzantium_block, Block, false),
            f("constantinople", self.constantinople_block, Block, false),
            f("petersburg", self.petersburg_block, Block, false),
            f("istanbul", self.istanbul_block, Block, false),
            f("muir_glacier", self.muir_glacier_block, Block, true),
            f("berlin", self.berlin_block, Block, false),
            f("london", self.london_block, Block, false),
            f("arrow_glacier", self.arrow_glacier_block, Block, true),
            f("gray_glacier", self.gray_glacier_block, Block, true),
            f("merge_netsplit", self.merge_netsplit_block, Block, true),
            f("shanghai", self.shanghai_time, Time, false),
            f("cancun", self.cancun_time, Time, false),
            f("prague", self.prague_time, Time, false),
            f("osaka", self.osaka_time, Time, false),
        ]
    }

    /// Check that the chain id is set and forks are scheduled in order.
    ///
    /// A mandatory fork that is unset disables every later fork. Optional
    /// forks may be skipped. Heights are compared only against heights and
    /// timestamps only against timestamps.
    pub fn check_fork_order(&self) -> Result<(), ValidationError> {
        if self.chain_id == 0 {
            return Err(ValidationError::ZeroChainId);
        }
        let mut last: Option<Fork> = None;
        for cur in self.forks() {
            if let Some(prev) = &last {
                match (prev.at, cur.at) {
                    (None, Some(_)) => {
                        return Err(ValidationError::ForkGap {
                            fork: cur.name,
                            previous: prev.name,
                        });
                    }
                    (Some(previous_at), Some(at)) if prev.kind == cur.kind && previous_at > at => {
                        return Err(ValidationError::ForkOutOfOrder {
                            fork: cur.name,
                            at,
                            previous: prev.name,
                            previous_at,
                        });
                    }
                    _ => {}
                }
            }
            if !cur.optional || cur.at.is_some() {
                last = Some(cur);
            }
        }
        Ok(())
    }

    pub fn is_london(&self, height: u64) -> bool {
        reached(self.london_block, height)
    }

    /// Timestamp forks only count once London is active.
    pub fn is_cancun(&self, height: u64, time: u64) -> bool {
        self.is_london(height) && reached(self.cancun_time, time)
    }

    /// Compute the active rule flags at `height` and block `time`.
    pub fn rules(&self, height: u64, time: u64) -> Rules {
        let london = self.is_london(height);
        Rules {
            chain_id: self.chain_id,
            is_homestead: reached(self.homestead_block, height),
            is_eip150: reached(self.eip150_block, height),
            is_eip155: reached(self.eip155_block, height),
            is_eip158: reached(self.eip158_block, height),
            is_byzantium: reached(self.byzantium_block, height),
            is_constantinople: reached(self.constantinople_block, height),
            is_petersburg: reached(self.petersburg_block, height),
            is_istanbul: reached(self.istanbul_block, height),
            is_berlin: reached(self.berlin_block, height),
            is_london: london,
            is_merge: reached(self.merge_netsplit_block, height),
            is_shanghai: london && reached(self.shanghai_time, time),
            is_cancun: london && reached(self.cancun_time, time),
            is_prague: london && reached(self.prague_time, time),
            is_osaka: london && reached(self.osaka_time, time),
        }
    }

    /// blake3 digest of the borsh encoding, identifying this parameter set.
    pub fn fingerprint(&self) -> Result<[u8; 32], ValidationError> {
        let bytes = borsh::to_vec(self).map_err(|e| ValidationError::Encoding {
            reason: e.to_string(),
        })?;
        Ok(*blake3::hash(&bytes).as_bytes())
    }
}
