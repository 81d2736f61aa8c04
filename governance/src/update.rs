//! Height-gated safety checks for a proposed parameter update.
//!
//! Activation heights must be fixed before they are reached and can never be
//! moved once the feature is live, so every node agrees on which rules a
//! given block was produced under no matter when it saw the update.

use meridian_messages::proto;
use meridian_types::{ConsensusParams, Height};

use crate::error::ParamsError;

/// Check `update` against the active `params` at height `h`.
///
/// Only sub-groups present in `update` are checked; absent ones keep their
/// current value and need no check.
pub fn validate_update(
    params: &ConsensusParams,
    update: &proto::ConsensusParams,
    h: Height,
) -> Result<(), ParamsError> {
    if let Some(abci) = &update.abci {
        validate_update_abci(
            params.abci.vote_extensions_enable_height,
            abci.vote_extensions_enable_height,
            h,
        )?;
    }
    if let Some(pbts) = &update.pbts {
        validate_update_pbts(params.pbts.pbts_enable_height, pbts.pbts_enable_height, h)?;
    }
    Ok(())
}

/// Vote-extension enable height: `current` is the active value, `next` the
/// proposed one.
pub fn validate_update_abci(current: i64, next: i64, h: Height) -> Result<(), ParamsError> {
    let height = h.value();
    if current == next {
        return Ok(());
    }
    if current != 0 && next == 0 {
        return Err(ParamsError::VoteExtensionsCannotBeDisabled);
    }
    if next <= height {
        return Err(ParamsError::VoteExtensionsHeightNotInFuture { current, height });
    }
    if current != 0 && current <= height {
        return Err(ParamsError::VoteExtensionsAlreadyActive { current, height });
    }
    Ok(())
}

/// PBTS enable height. Stricter than the vote-extension rule: once any
/// height has been scheduled, it cannot change at all.
pub fn validate_update_pbts(current: i64, next: i64, h: Height) -> Result<(), ParamsError> {
    let height = h.value();
    if current != 0 {
        return Err(ParamsError::PbtsAlreadyEnabled);
    }
    if next <= height {
        return Err(ParamsError::PbtsHeightNotInFuture { current, height });
    }
    Ok(())
}
