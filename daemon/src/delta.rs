//! Operator-written parameter updates.
//!
//! A delta file mirrors the wire update: each sub-group is an optional table,
//! and only the synchrony fields may be given individually.

use meridian_messages::codec::duration_to_proto;
use meridian_messages::proto;
use meridian_types::{
    AbciParams, BlockParams, Duration, EvidenceParams, PbtsParams, ValidatorParams, VersionParams,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{read_file, ConfigError};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsDelta {
    pub block: Option<BlockParams>,
    pub evidence: Option<EvidenceParams>,
    pub validator: Option<ValidatorParams>,
    pub version: Option<VersionParams>,
    pub abci: Option<AbciParams>,
    pub synchrony: Option<SynchronyDelta>,
    pub pbts: Option<PbtsParams>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynchronyDelta {
    pub precision: Option<Duration>,
    pub message_delay: Option<Duration>,
}

impl ParamsDelta {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read_file(path)?)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl From<&ParamsDelta> for proto::ConsensusParams {
    fn from(delta: &ParamsDelta) -> Self {
        Self {
            block: delta.block.map(|b| proto::BlockParams {
                max_bytes: b.max_bytes,
                max_gas: b.max_gas,
            }),
            evidence: delta.evidence.map(|e| proto::EvidenceParams {
                max_age_num_blocks: e.max_age_num_blocks,
                max_age_duration: Some(duration_to_proto(e.max_age_duration)),
                max_bytes: e.max_bytes,
            }),
            validator: delta.validator.as_ref().map(|v| proto::ValidatorParams {
                pub_key_types: v.pub_key_types.clone(),
            }),
            version: delta.version.map(|v| proto::VersionParams { app: v.app }),
            abci: delta.abci.map(|a| proto::AbciParams {
                vote_extensions_enable_height: a.vote_extensions_enable_height,
            }),
            synchrony: delta.synchrony.map(|s| proto::SynchronyParams {
                precision: s.precision.map(duration_to_proto),
                message_delay: s.message_delay.map(duration_to_proto),
            }),
            pbts: delta.pbts.map(|p| proto::PbtsParams {
                pbts_enable_height: p.pbts_enable_height,
            }),
        }
    }
}
