//! Consensus-parameter governance for Meridian.
//!
//! Every validator must derive the same parameter set at every height from
//! the same inputs, without talking to anyone. This crate holds the rules:
//!
//! - `validate`: internal consistency of a full parameter set
//! - `update`: height-gated safety of a proposed update
//! - `merge`: building the next parameter set from an accepted update
//! - `hash`: the header commitment of the parameters
//! - `engine`: the above chained together at a block boundary
//! - `vote_extension`: gating the application's vote-extension calls by height
//!
//! All of it is pure and synchronous. Parameter sets are values; nothing here
//! keeps state between calls.

pub mod engine;
pub mod error;
pub mod hash;
pub mod merge;
pub mod update;
pub mod validate;
pub mod vote_extension;

pub use engine::{GovernanceEngine, ParamsTransition};
pub use error::{GovernanceError, ParamsError};
pub use hash::params_hash;
pub use merge::apply_update;
pub use update::{validate_update, validate_update_abci, validate_update_pbts};
pub use validate::validate_basic;
pub use vote_extension::{
    BlockContext, PrecommitVerdict, ValidatorId, VerifyStatus, VoteExtensionApp,
    VoteExtensionGate,
};
