//! Protobuf wire messages for consensus parameters.
//!
//! Every sub-message of [`ConsensusParams`] is optional on the wire. When the
//! message carries an update, an absent sub-message means "leave this
//! sub-group unchanged".

use prost_types::Duration;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusParams {
    #[prost(message, optional, tag = "1")]
    pub block: Option<BlockParams>,
    #[prost(message, optional, tag = "2")]
    pub evidence: Option<EvidenceParams>,
    #[prost(message, optional, tag = "3")]
    pub validator: Option<ValidatorParams>,
    #[prost(message, optional, tag = "4")]
    pub version: Option<VersionParams>,
    #[prost(message, optional, tag = "5")]
    pub abci: Option<AbciParams>,
    #[prost(message, optional, tag = "6")]
    pub synchrony: Option<SynchronyParams>,
    #[prost(message, optional, tag = "7")]
    pub pbts: Option<PbtsParams>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct BlockParams {
    #[prost(int64, tag = "1")]
    pub max_bytes: i64,
    #[prost(int64, tag = "2")]
    pub max_gas: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EvidenceParams {
    #[prost(int64, tag = "1")]
    pub max_age_num_blocks: i64,
    #[prost(message, optional, tag = "2")]
    pub max_age_duration: Option<Duration>,
    #[prost(int64, tag = "3")]
    pub max_bytes: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidatorParams {
    #[prost(string, repeated, tag = "1")]
    pub pub_key_types: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct VersionParams {
    #[prost(uint64, tag = "1")]
    pub app: u64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct AbciParams {
    #[prost(int64, tag = "1")]
    pub vote_extensions_enable_height: i64,
}

/// Each field may be absent independently; an absent field is not updated.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SynchronyParams {
    #[prost(message, optional, tag = "1")]
    pub precision: Option<Duration>,
    #[prost(message, optional, tag = "2")]
    pub message_delay: Option<Duration>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct PbtsParams {
    #[prost(int64, tag = "1")]
    pub pbts_enable_height: i64,
}

/// The subset of the consensus params committed to the block header.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct HashedParams {
    #[prost(int64, tag = "1")]
    pub block_max_bytes: i64,
    #[prost(int64, tag = "2")]
    pub block_max_gas: i64,
}

/// The part of the application's finalize-block response this crate reads.
///
/// Fields 1-3 (events, tx results, validator updates) belong to other
/// subsystems and are skipped when decoding.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FinalizeBlockResponse {
    #[prost(message, optional, tag = "4")]
    pub consensus_param_updates: Option<ConsensusParams>,
    #[prost(bytes = "vec", tag = "5")]
    pub app_hash: Vec<u8>,
}
