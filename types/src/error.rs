//! Caller-contract violations shared across crates.
//!
//! These are not data errors. They mean a caller broke a precondition the
//! protocol relies on, and must never be treated as a retryable rejection.

use thiserror::Error;

/// A broken precondition between the governance module and its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("height {height} is below 1; height-gated checks require a height of at least 1")]
    HeightBelowOne { height: i64 },

    #[error("required sub-message {0} is missing from the consensus params")]
    MissingSubgroup(&'static str),

    #[error("validator {0} is not part of the local validator set")]
    UnknownValidator(String),
}
