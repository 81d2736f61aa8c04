//! Internal-consistency checks for a complete parameter set.

use meridian_crypto::KeyTypeRegistry;
use meridian_types::{ConsensusParams, MAX_BLOCK_SIZE_BYTES};

use crate::error::ParamsError;

/// Check every field of `params` against its allowed range.
///
/// Checks run block, evidence, abci, synchrony, pbts, validator; the first
/// failure is returned.
pub fn validate_basic(
    params: &ConsensusParams,
    registry: &KeyTypeRegistry,
) -> Result<(), ParamsError> {
    let block = &params.block;
    if block.max_bytes == 0 {
        return Err(ParamsError::BlockMaxBytesZero);
    }
    if block.max_bytes < -1 {
        return Err(ParamsError::BlockMaxBytesBelowMinusOne(block.max_bytes));
    }
    if block.max_bytes > MAX_BLOCK_SIZE_BYTES {
        return Err(ParamsError::BlockMaxBytesTooBig(block.max_bytes));
    }
    if block.max_gas < -1 {
        return Err(ParamsError::BlockMaxGasBelowMinusOne(block.max_gas));
    }

    let evidence = &params.evidence;
    if evidence.max_age_num_blocks <= 0 {
        return Err(ParamsError::EvidenceMaxAgeNumBlocksNotPositive(
            evidence.max_age_num_blocks,
        ));
    }
    if !evidence.max_age_duration.is_positive() {
        return Err(ParamsError::EvidenceMaxAgeDurationNotPositive(
            evidence.max_age_duration,
        ));
    }
    let limit = params.effective_max_block_bytes();
    if evidence.max_bytes > limit {
        return Err(ParamsError::EvidenceMaxBytesTooBig {
            max_bytes: evidence.max_bytes,
            limit,
        });
    }
    if evidence.max_bytes < 0 {
        return Err(ParamsError::EvidenceMaxBytesNegative(evidence.max_bytes));
    }

    if params.abci.vote_extensions_enable_height < 0 {
        return Err(ParamsError::VoteExtensionsEnableHeightNegative(
            params.abci.vote_extensions_enable_height,
        ));
    }

    if !params.synchrony.message_delay.is_positive() {
        return Err(ParamsError::SynchronyMessageDelayNotPositive(
            params.synchrony.message_delay,
        ));
    }
    if !params.synchrony.precision.is_positive() {
        return Err(ParamsError::SynchronyPrecisionNotPositive(
            params.synchrony.precision,
        ));
    }

    if params.pbts.pbts_enable_height < 0 {
        return Err(ParamsError::PbtsEnableHeightNegative(
            params.pbts.pbts_enable_height,
        ));
    }

    let key_types = &params.validator.pub_key_types;
    if key_types.is_empty() {
        return Err(ParamsError::NoPubKeyTypes);
    }
    if let Some((index, key_type)) = key_types
        .iter()
        .enumerate()
        .find(|(_, kt)| !registry.contains(kt))
    {
        return Err(ParamsError::UnknownPubKeyType {
            index,
            key_type: key_type.clone(),
        });
    }

    Ok(())
}
