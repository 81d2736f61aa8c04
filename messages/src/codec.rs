//! Conversion between in-memory consensus params and their wire form.
//!
//! Encoding always emits every sub-message. Decoding requires block,
//! evidence, validator and version; abci, synchrony and pbts may be absent,
//! in which case the decoded fields stay at zero, i.e. disabled.

use meridian_types::{
    AbciParams, BlockParams, ContractViolation, Duration, EvidenceParams, PbtsParams,
    SynchronyParams, ValidatorParams, VersionParams,
};
use prost::Message;

use crate::error::CodecError;
use crate::proto;

pub fn duration_to_proto(d: Duration) -> prost_types::Duration {
    let (seconds, nanos) = d.to_seconds_nanos();
    prost_types::Duration { seconds, nanos }
}

/// An absent duration decodes as zero.
pub fn duration_from_proto(d: Option<&prost_types::Duration>) -> Duration {
    d.map_or(Duration::ZERO, |d| Duration::from_seconds_nanos(d.seconds, d.nanos))
}

impl From<&meridian_types::ConsensusParams> for proto::ConsensusParams {
    fn from(params: &meridian_types::ConsensusParams) -> Self {
        Self {
            block: Some(proto::BlockParams {
                max_bytes: params.block.max_bytes,
                max_gas: params.block.max_gas,
            }),
            evidence: Some(proto::EvidenceParams {
                max_age_num_blocks: params.evidence.max_age_num_blocks,
                max_age_duration: Some(duration_to_proto(params.evidence.max_age_duration)),
                max_bytes: params.evidence.max_bytes,
            }),
            validator: Some(proto::ValidatorParams {
                pub_key_types: params.validator.pub_key_types.clone(),
            }),
            version: Some(proto::VersionParams {
                app: params.version.app,
            }),
            abci: Some(proto::AbciParams {
                vote_extensions_enable_height: params.abci.vote_extensions_enable_height,
            }),
            synchrony: Some(proto::SynchronyParams {
                precision: Some(duration_to_proto(params.synchrony.precision)),
                message_delay: Some(duration_to_proto(params.synchrony.message_delay)),
            }),
            pbts: Some(proto::PbtsParams {
                pbts_enable_height: params.pbts.pbts_enable_height,
            }),
        }
    }
}

impl From<meridian_types::ConsensusParams> for proto::ConsensusParams {
    fn from(params: meridian_types::ConsensusParams) -> Self {
        Self::from(&params)
    }
}

impl TryFrom<proto::ConsensusParams> for meridian_types::ConsensusParams {
    type Error = ContractViolation;

    fn try_from(pb: proto::ConsensusParams) -> Result<Self, Self::Error> {
        let block = pb.block.ok_or(ContractViolation::MissingSubgroup("block"))?;
        let evidence = pb
            .evidence
            .ok_or(ContractViolation::MissingSubgroup("evidence"))?;
        let validator = pb
            .validator
            .ok_or(ContractViolation::MissingSubgroup("validator"))?;
        let version = pb
            .version
            .ok_or(ContractViolation::MissingSubgroup("version"))?;

        let synchrony = pb.synchrony.unwrap_or_default();

        Ok(Self {
            block: BlockParams {
                max_bytes: block.max_bytes,
                max_gas: block.max_gas,
            },
            evidence: EvidenceParams {
                max_age_num_blocks: evidence.max_age_num_blocks,
                max_age_duration: duration_from_proto(evidence.max_age_duration.as_ref()),
                max_bytes: evidence.max_bytes,
            },
            validator: ValidatorParams {
                pub_key_types: validator.pub_key_types,
            },
            version: VersionParams { app: version.app },
            abci: AbciParams {
                vote_extensions_enable_height: pb
                    .abci
                    .map_or(0, |a| a.vote_extensions_enable_height),
            },
            synchrony: SynchronyParams {
                precision: duration_from_proto(synchrony.precision.as_ref()),
                message_delay: duration_from_proto(synchrony.message_delay.as_ref()),
            },
            pbts: PbtsParams {
                pbts_enable_height: pb.pbts.map_or(0, |p| p.pbts_enable_height),
            },
        })
    }
}

/// Outbound conversion; every sub-message is present.
pub fn to_proto(params: &meridian_types::ConsensusParams) -> proto::ConsensusParams {
    params.into()
}

/// Inbound conversion; see the module docs for which sub-messages may be absent.
pub fn from_proto(
    pb: proto::ConsensusParams,
) -> Result<meridian_types::ConsensusParams, ContractViolation> {
    pb.try_into()
}

/// Serialize a parameter set to protobuf bytes.
pub fn encode_params(params: &meridian_types::ConsensusParams) -> Vec<u8> {
    to_proto(params).encode_to_vec()
}

/// Parse protobuf bytes into a parameter set.
pub fn decode_params(bytes: &[u8]) -> Result<meridian_types::ConsensusParams, CodecError> {
    let pb = proto::ConsensusParams::decode(bytes)?;
    Ok(from_proto(pb)?)
}
