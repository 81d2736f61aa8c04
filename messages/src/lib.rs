//! Wire format for Meridian consensus parameters.
//!
//! `proto` holds the protobuf messages exchanged with the application and
//! peers; `codec` converts them to and from [`meridian_types::ConsensusParams`].

pub mod codec;
pub mod error;
pub mod proto;

pub use codec::{decode_params, encode_params, from_proto, to_proto};
pub use error::CodecError;
