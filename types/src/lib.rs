//! Fundamental types for Meridian consensus-parameter governance.
//!
//! This crate defines the value types shared by every other crate in the
//! workspace: the consensus parameter set and its sub-groups, heights,
//! signed durations, the header-committed params hash, and the
//! caller-contract error kind.

pub mod error;
pub mod hash;
pub mod height;
pub mod keys;
pub mod params;
pub mod time;

pub use error::ContractViolation;
pub use hash::ParamsHash;
pub use height::Height;
pub use params::{
    AbciParams, BlockParams, ConsensusParams, EvidenceParams, PbtsParams, SynchronyParams,
    ValidatorParams, VersionParams, BLOCK_PART_SIZE_BYTES, MAX_BLOCK_PARTS_COUNT,
    MAX_BLOCK_SIZE_BYTES,
};
pub use time::{Duration, ParseDurationError};
