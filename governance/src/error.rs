use meridian_types::{ContractViolation, Duration, MAX_BLOCK_SIZE_BYTES};
use thiserror::Error;

/// A consensus parameter set or update that must be rejected.
///
/// These are data errors: the candidate is refused as a whole and nothing is
/// applied. Repeating the same request fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("block.MaxBytes cannot be 0")]
    BlockMaxBytesZero,

    #[error("block.MaxBytes must be -1 or greater than 0. Got {0}")]
    BlockMaxBytesBelowMinusOne(i64),

    #[error("block.MaxBytes is too big. {0} > {max}", max = MAX_BLOCK_SIZE_BYTES)]
    BlockMaxBytesTooBig(i64),

    #[error("block.MaxGas must be greater or equal to -1. Got {0}")]
    BlockMaxGasBelowMinusOne(i64),

    #[error("evidence.MaxAgeNumBlocks must be greater than 0. Got {0}")]
    EvidenceMaxAgeNumBlocksNotPositive(i64),

    #[error("evidence.MaxAgeDuration must be greater than 0 if provided, Got {0}")]
    EvidenceMaxAgeDurationNotPositive(Duration),

    #[error("evidence.MaxBytes is greater than upper bound, {max_bytes} > {limit}")]
    EvidenceMaxBytesTooBig { max_bytes: i64, limit: i64 },

    #[error("evidence.MaxBytes must be non negative. Got {0}")]
    EvidenceMaxBytesNegative(i64),

    #[error("abci.VoteExtensionsEnableHeight cannot be negative. Got {0}")]
    VoteExtensionsEnableHeightNegative(i64),

    #[error("synchrony.MessageDelay must be greater than 0. Got {0}")]
    SynchronyMessageDelayNotPositive(Duration),

    #[error("synchrony.Precision must be greater than 0. Got {0}")]
    SynchronyPrecisionNotPositive(Duration),

    #[error("pbts.PBTSEnableHeight must not be negative. Got {0}")]
    PbtsEnableHeightNegative(i64),

    #[error("len(validator.PubKeyTypes) must be greater than 0")]
    NoPubKeyTypes,

    #[error("validator.PubKeyTypes[{index}], {key_type}, is an unknown pubkey type")]
    UnknownPubKeyType { index: usize, key_type: String },

    #[error("vote extensions cannot be disabled once enabled")]
    VoteExtensionsCannotBeDisabled,

    #[error(
        "VoteExtensionsEnableHeight cannot be updated to a past height, \
         initial height: {current}, current height {height}"
    )]
    VoteExtensionsHeightNotInFuture { current: i64, height: i64 },

    #[error(
        "VoteExtensionsEnableHeight cannot be modified once the initial height has occurred, \
         initial height: {current}, current height {height}"
    )]
    VoteExtensionsAlreadyActive { current: i64, height: i64 },

    #[error("pbts already enabled")]
    PbtsAlreadyEnabled,

    #[error(
        "PbtsEnableHeight cannot be updated to a past height, \
         pbts enabled height: {current}, current height {height}"
    )]
    PbtsHeightNotInFuture { current: i64, height: i64 },
}

impl ParamsError {
    /// Dotted name of the field the error is about.
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlockMaxBytesZero
            | Self::BlockMaxBytesBelowMinusOne(_)
            | Self::BlockMaxBytesTooBig(_) => "block.max_bytes",
            Self::BlockMaxGasBelowMinusOne(_) => "block.max_gas",
            Self::EvidenceMaxAgeNumBlocksNotPositive(_) => "evidence.max_age_num_blocks",
            Self::EvidenceMaxAgeDurationNotPositive(_) => "evidence.max_age_duration",
            Self::EvidenceMaxBytesTooBig { .. } | Self::EvidenceMaxBytesNegative(_) => {
                "evidence.max_bytes"
            }
            Self::VoteExtensionsEnableHeightNegative(_)
            | Self::VoteExtensionsCannotBeDisabled
            | Self::VoteExtensionsHeightNotInFuture { .. }
            | Self::VoteExtensionsAlreadyActive { .. } => "abci.vote_extensions_enable_height",
            Self::SynchronyMessageDelayNotPositive(_) => "synchrony.message_delay",
            Self::SynchronyPrecisionNotPositive(_) => "synchrony.precision",
            Self::PbtsEnableHeightNegative(_)
            | Self::PbtsAlreadyEnabled
            | Self::PbtsHeightNotInFuture { .. } => "pbts.pbts_enable_height",
            Self::NoPubKeyTypes | Self::UnknownPubKeyType { .. } => "validator.pub_key_types",
        }
    }
}

/// Everything the governance pipeline can refuse with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GovernanceError {
    #[error("invalid consensus params: {0}")]
    Invalid(#[from] ParamsError),

    #[error("caller contract violated: {0}")]
    Contract(#[from] ContractViolation),
}

impl GovernanceError {
    /// Contract violations signal an internal inconsistency and must not be
    /// handled like a rejected candidate.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Contract(_))
    }
}
