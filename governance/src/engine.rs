//! Core governance engine. Runs parameter updates through check, merge,
//! re-validation and hashing at a block boundary.

use meridian_crypto::KeyTypeRegistry;
use meridian_messages::proto;
use meridian_types::{ConsensusParams, Height, ParamsHash};

use crate::error::{GovernanceError, ParamsError};
use crate::hash::params_hash;
use crate::merge::{apply_update, updated_subgroups};
use crate::update::validate_update;
use crate::validate::validate_basic;

/// Outcome of processing one block's parameter updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamsTransition {
    /// The parameter set in effect after the block.
    pub params: ConsensusParams,
    /// Header commitment of `params`.
    pub hash: ParamsHash,
    /// Whether the block carried an update at all.
    pub changed: bool,
}

/// Stateless entry point to the governance rules.
///
/// Holds only a borrowed, read-only key-type registry; every method is a pure
/// function of its arguments.
#[derive(Clone, Copy, Debug)]
pub struct GovernanceEngine<'r> {
    registry: &'r KeyTypeRegistry,
}

impl GovernanceEngine<'static> {
    /// Engine over the network-wide key-type registry.
    pub fn standard() -> Self {
        Self::new(KeyTypeRegistry::standard())
    }
}

impl Default for GovernanceEngine<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'r> GovernanceEngine<'r> {
    pub fn new(registry: &'r KeyTypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r KeyTypeRegistry {
        self.registry
    }

    /// Check a complete parameter set for internal consistency.
    pub fn validate_basic(&self, params: &ConsensusParams) -> Result<(), ParamsError> {
        validate_basic(params, self.registry).inspect_err(|e| {
            tracing::warn!(field = e.field(), error = %e, "consensus params rejected");
        })
    }

    /// Check that `update` is safe to apply to `params` at height `h`.
    pub fn validate_update(
        &self,
        params: &ConsensusParams,
        update: &proto::ConsensusParams,
        h: Height,
    ) -> Result<(), ParamsError> {
        validate_update(params, update, h).inspect_err(|e| {
            tracing::warn!(height = %h, field = e.field(), error = %e, "params update rejected");
        })
    }

    /// Merge `update` into `params`. Does not check the result.
    pub fn apply_update(
        &self,
        params: &ConsensusParams,
        update: &proto::ConsensusParams,
    ) -> ConsensusParams {
        apply_update(params, update)
    }

    pub fn hash(&self, params: &ConsensusParams) -> ParamsHash {
        params_hash(params)
    }

    /// The parameter set a chain starts from: the operator's override when
    /// given, the defaults otherwise, validated either way.
    pub fn genesis(
        &self,
        operator_override: Option<ConsensusParams>,
    ) -> Result<ConsensusParams, ParamsError> {
        let params = operator_override.unwrap_or_else(ConsensusParams::defaults);
        self.validate_basic(&params)?;
        Ok(params)
    }

    /// Check, merge, re-validate and hash `update` in one step.
    ///
    /// Fails closed: on any error nothing is applied and `params` remains
    /// the active set.
    pub fn process_update(
        &self,
        params: &ConsensusParams,
        update: &proto::ConsensusParams,
        h: Height,
    ) -> Result<ParamsTransition, ParamsError> {
        self.validate_update(params, update, h)?;
        let next = self.apply_update(params, update);
        self.validate_basic(&next)?;
        let hash = self.hash(&next);

        tracing::debug!(
            height = %h,
            subgroups = ?updated_subgroups(update),
            hash = %hash,
            "consensus params updated"
        );

        Ok(ParamsTransition {
            params: next,
            hash,
            changed: true,
        })
    }

    /// Apply the parameter updates carried by a finalize-block response.
    ///
    /// `height` is the height of the block being finalized, as reported by
    /// the block-execution pipeline. A height below 1 is a contract
    /// violation, reported separately from rejected updates.
    pub fn finalize_block(
        &self,
        params: &ConsensusParams,
        response: &proto::FinalizeBlockResponse,
        height: i64,
    ) -> Result<ParamsTransition, GovernanceError> {
        let h = Height::new(height).inspect_err(|e| {
            tracing::error!(height, error = %e, "finalize_block called with an invalid height");
        })?;

        match &response.consensus_param_updates {
            Some(update) => Ok(self.process_update(params, update, h)?),
            None => Ok(ParamsTransition {
                params: params.clone(),
                hash: self.hash(params),
                changed: false,
            }),
        }
    }
}
