//! Block heights as seen by height-gated parameter checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ContractViolation;

/// A block height of at least 1.
///
/// Every activation predicate and update check takes a `Height`, so the
/// "height >= 1" precondition is enforced once, where the value enters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Height(i64);

impl Height {
    /// The first block of a chain.
    pub const INITIAL: Self = Self(1);

    pub fn new(height: i64) -> Result<Self, ContractViolation> {
        if height < 1 {
            return Err(ContractViolation::HeightBelowOne { height });
        }
        Ok(Self(height))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Height {
    type Error = ContractViolation;

    fn try_from(height: i64) -> Result<Self, Self::Error> {
        Self::new(height)
    }
}

impl From<Height> for i64 {
    fn from(h: Height) -> i64 {
        h.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
