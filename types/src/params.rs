//! Consensus parameters: the values every validator must derive identically.
//!
//! A `ConsensusParams` value is immutable once built. It is replaced, never
//! edited, when an accepted update is applied at a block boundary.

use crate::height::Height;
use crate::keys::KEY_TYPE_ED25519;
use crate::time::Duration;
use serde::{Deserialize, Serialize};

/// The all-time ceiling on block size, whatever `BlockParams::max_bytes` says.
pub const MAX_BLOCK_SIZE_BYTES: i64 = 100 * 1024 * 1024;

/// Size of one block part.
pub const BLOCK_PART_SIZE_BYTES: u32 = 64 * 1024;

/// Maximum number of parts a block of `MAX_BLOCK_SIZE_BYTES` splits into.
pub const MAX_BLOCK_PARTS_COUNT: i64 = MAX_BLOCK_SIZE_BYTES / BLOCK_PART_SIZE_BYTES as i64 + 1;

/// Consensus-critical parameters that determine the validity of blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusParams {
    pub block: BlockParams,
    pub evidence: EvidenceParams,
    pub validator: ValidatorParams,
    pub version: VersionParams,
    pub abci: AbciParams,
    pub synchrony: SynchronyParams,
    pub pbts: PbtsParams,
}

/// Limits on block size and gas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockParams {
    /// Maximum block size in bytes, or -1 for "up to `MAX_BLOCK_SIZE_BYTES`".
    pub max_bytes: i64,
    /// Maximum gas per block, or -1 for unlimited.
    pub max_gas: i64,
}

/// How evidence of validator misbehaviour is bounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceParams {
    /// Only accept evidence more recent than this many blocks.
    pub max_age_num_blocks: i64,
    pub max_age_duration: Duration,
    /// Total evidence bytes allowed in one block.
    pub max_bytes: i64,
}

/// Key types validators are allowed to use. ABCI naming, not amino names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorParams {
    pub pub_key_types: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionParams {
    pub app: u64,
}

/// Application-interface features gated by height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbciParams {
    /// First height at which vote extensions are required; 0 means never.
    pub vote_extensions_enable_height: i64,
}

/// Bounds used when judging proposer-supplied block timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynchronyParams {
    pub precision: Duration,
    pub message_delay: Duration,
}

/// Proposer-based timestamps, gated by height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PbtsParams {
    /// First height at which PBTS is in effect; 0 means never.
    pub pbts_enable_height: i64,
}

fn enabled_at(enable_height: i64, h: Height) -> bool {
    enable_height != 0 && enable_height <= h.value()
}

impl ConsensusParams {
    /// Canonical starting value for a new chain.
    pub fn defaults() -> Self {
        Self {
            block: BlockParams::defaults(),
            evidence: EvidenceParams::defaults(),
            validator: ValidatorParams::defaults(),
            version: VersionParams::defaults(),
            abci: AbciParams::defaults(),
            synchrony: SynchronyParams::defaults(),
            pbts: PbtsParams::defaults(),
        }
    }

    /// `block.max_bytes` with -1 replaced by the global ceiling.
    pub fn effective_max_block_bytes(&self) -> i64 {
        if self.block.max_bytes == -1 {
            MAX_BLOCK_SIZE_BYTES
        } else {
            self.block.max_bytes
        }
    }
}

impl BlockParams {
    pub fn defaults() -> Self {
        Self {
            max_bytes: 4 * 1024 * 1024, // 4 MiB
            max_gas: 10_000_000,
        }
    }
}

impl EvidenceParams {
    pub fn defaults() -> Self {
        Self {
            max_age_num_blocks: 100_000, // ~27.8h at one block per second
            max_age_duration: Duration::from_hours(48),
            max_bytes: 1024 * 1024, // 1 MiB
        }
    }
}

impl ValidatorParams {
    /// Only ed25519 keys.
    pub fn defaults() -> Self {
        Self {
            pub_key_types: vec![KEY_TYPE_ED25519.to_string()],
        }
    }

    /// Whether `key_type` is one of the configured key types.
    pub fn is_valid_pub_key_type(&self, key_type: &str) -> bool {
        self.pub_key_types.iter().any(|t| t == key_type)
    }
}

impl VersionParams {
    pub fn defaults() -> Self {
        Self { app: 0 }
    }
}

impl AbciParams {
    /// Vote extensions off.
    pub fn defaults() -> Self {
        Self {
            vote_extensions_enable_height: 0,
        }
    }

    /// Whether vote extensions are in effect at height `h`.
    pub fn vote_extensions_enabled(&self, h: Height) -> bool {
        enabled_at(self.vote_extensions_enable_height, h)
    }
}

impl SynchronyParams {
    pub fn defaults() -> Self {
        Self {
            precision: Duration::from_millis(500),
            message_delay: Duration::from_secs(2),
        }
    }
}

impl PbtsParams {
    /// PBTS off.
    pub fn defaults() -> Self {
        Self {
            pbts_enable_height: 0,
        }
    }

    /// Whether proposer-based timestamps are in effect at height `h`.
    pub fn pbts_enabled(&self, h: Height) -> bool {
        enabled_at(self.pbts_enable_height, h)
    }
}

macro_rules! default_from_defaults {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    Self::defaults()
                }
            }
        )*
    };
}

default_from_defaults!(
    ConsensusParams,
    BlockParams,
    EvidenceParams,
    ValidatorParams,
    VersionParams,
    AbciParams,
    SynchronyParams,
    PbtsParams,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn h(v: i64) -> Height {
        Height::new(v).unwrap()
    }

    #[test]
    fn defaults_match_production_values() {
        let p = ConsensusParams::defaults();
        assert_eq!(p.block.max_bytes, 4_194_304);
        assert_eq!(p.block.max_gas, 10_000_000);
        assert_eq!(p.evidence.max_age_num_blocks, 100_000);
        assert_eq!(p.evidence.max_age_duration, Duration::from_hours(48));
        assert_eq!(p.evidence.max_bytes, 1_048_576);
        assert_eq!(p.validator.pub_key_types, vec!["ed25519".to_string()]);
        assert_eq!(p.version.app, 0);
        assert_eq!(p.abci.vote_extensions_enable_height, 0);
        assert_eq!(p.synchrony.precision, Duration::from_millis(500));
        assert_eq!(p.synchrony.message_delay, Duration::from_secs(2));
        assert_eq!(p.pbts.pbts_enable_height, 0);
    }

    #[test]
    fn block_parts_count() {
        assert_eq!(MAX_BLOCK_PARTS_COUNT, 1601);
    }

    #[test]
    fn disabled_features_never_enabled() {
        let abci = AbciParams::defaults();
        let pbts = PbtsParams::defaults();
        for v in [1, 2, 1_000, i64::MAX] {
            assert!(!abci.vote_extensions_enabled(h(v)));
            assert!(!pbts.pbts_enabled(h(v)));
        }
    }

    #[test]
    fn enabled_from_scheduled_height_onward() {
        let abci = AbciParams {
            vote_extensions_enable_height: 50,
        };
        assert!(!abci.vote_extensions_enabled(h(49)));
        assert!(abci.vote_extensions_enabled(h(50)));
        assert!(abci.vote_extensions_enabled(h(51)));

        let pbts = PbtsParams {
            pbts_enable_height: 1,
        };
        assert!(pbts.pbts_enabled(h(1)));
    }

    #[test]
    fn effective_max_bytes_substitutes_ceiling() {
        let mut p = ConsensusParams::defaults();
        assert_eq!(p.effective_max_block_bytes(), 4_194_304);
        p.block.max_bytes = -1;
        assert_eq!(p.effective_max_block_bytes(), MAX_BLOCK_SIZE_BYTES);
    }

    #[test]
    fn pub_key_type_membership() {
        let v = ValidatorParams::defaults();
        assert!(v.is_valid_pub_key_type("ed25519"));
        assert!(!v.is_valid_pub_key_type("secp256k1"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let p: ConsensusParams =
            serde_json::from_str(r#"{"abci":{"vote_extensions_enable_height":10}}"#).unwrap();
        assert_eq!(p.abci.vote_extensions_enable_height, 10);
        assert_eq!(p.block, BlockParams::defaults());
        assert_eq!(p.synchrony, SynchronyParams::defaults());
    }
}
