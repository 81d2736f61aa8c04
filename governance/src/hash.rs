//! Header commitment of the consensus params.
//!
//! Only `block.max_bytes` and `block.max_gas` are hashed. New parameters can
//! be added without changing the header hash or invalidating old headers.
//! No Merkle tree, just a small message to hash.

use meridian_crypto::tmhash;
use meridian_messages::proto::HashedParams;
use meridian_types::{ConsensusParams, ParamsHash};
use prost::Message;

/// SHA-256 of the protobuf encoding of [`HashedParams`].
pub fn params_hash(params: &ConsensusParams) -> ParamsHash {
    let hashed = HashedParams {
        block_max_bytes: params.block.max_bytes,
        block_max_gas: params.block.max_gas,
    };
    ParamsHash::new(tmhash(&hashed.encode_to_vec()))
}
