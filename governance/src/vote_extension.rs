//! Height gating for vote extensions.
//!
//! What an extension contains and how it is verified belongs to the
//! application. This module only decides, from the active [`AbciParams`],
//! whether the application is consulted at all, and what happens to a
//! pre-commit whose extension the application refuses.

use meridian_types::{AbciParams, ContractViolation, Height};
use std::fmt;

/// Identity of a validator in the local validator set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValidatorId(pub String);

impl fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The block a pre-commit is being prepared for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockContext {
    pub height: Height,
    pub round: u32,
    pub block_hash: [u8; 32],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyStatus {
    Accept,
    Reject,
}

/// Application side of the vote-extension exchange.
pub trait VoteExtensionApp {
    /// Produce the opaque extension to attach to our pre-commit.
    fn extend_vote(&self, height: Height, block: &BlockContext) -> Vec<u8>;

    /// Judge the extension a peer attached to its pre-commit.
    fn verify_vote_extension(&self, validator: &ValidatorId, extension: &[u8]) -> VerifyStatus;
}

/// What to do with a received pre-commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrecommitVerdict {
    /// Count the vote (and its extension, if any).
    Admit,
    /// Drop the whole pre-commit, vote and extension, from the tally.
    Discard,
}

/// Decides per height whether vote extensions are produced and verified.
#[derive(Clone, Copy, Debug)]
pub struct VoteExtensionGate<'a> {
    abci: AbciParams,
    validators: &'a [ValidatorId],
}

impl<'a> VoteExtensionGate<'a> {
    pub fn new(abci: AbciParams, validators: &'a [ValidatorId]) -> Self {
        Self { abci, validators }
    }

    pub fn enabled(&self, h: Height) -> bool {
        self.abci.vote_extensions_enabled(h)
    }

    /// The extension to attach to our pre-commit for `block`, or `None`
    /// when extensions are not in effect at that height.
    pub fn extension_for_precommit<A>(&self, app: &A, block: &BlockContext) -> Option<Vec<u8>>
    where
        A: VoteExtensionApp + ?Sized,
    {
        self.enabled(block.height)
            .then(|| app.extend_vote(block.height, block))
    }

    /// Decide whether a peer's pre-commit at height `h` enters the tally.
    ///
    /// A sender outside the local validator set is a contract violation:
    /// such a message must have been filtered before reaching this point.
    pub fn admit_precommit<A>(
        &self,
        app: &A,
        h: Height,
        validator: &ValidatorId,
        extension: &[u8],
    ) -> Result<PrecommitVerdict, ContractViolation>
    where
        A: VoteExtensionApp + ?Sized,
    {
        if !self.validators.contains(validator) {
            tracing::error!(%validator, height = %h, "pre-commit from unknown validator");
            return Err(ContractViolation::UnknownValidator(validator.to_string()));
        }

        if !self.enabled(h) {
            if extension.is_empty() {
                return Ok(PrecommitVerdict::Admit);
            }
            tracing::warn!(
                %validator,
                height = %h,
                len = extension.len(),
                "unexpected vote extension before activation height"
            );
            return Ok(PrecommitVerdict::Discard);
        }

        match app.verify_vote_extension(validator, extension) {
            VerifyStatus::Accept => Ok(PrecommitVerdict::Admit),
            VerifyStatus::Reject => {
                tracing::warn!(%validator, height = %h, "vote extension rejected by application");
                Ok(PrecommitVerdict::Discard)
            }
        }
    }
}
