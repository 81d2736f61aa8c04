//! Applying an accepted update to the active parameter set.

use meridian_messages::codec::duration_from_proto;
use meridian_messages::proto;
use meridian_types::{
    AbciParams, BlockParams, ConsensusParams, EvidenceParams, PbtsParams, SynchronyParams,
    ValidatorParams, VersionParams,
};

/// Build the parameter set that results from applying `update` to `params`.
///
/// A present sub-group replaces every field of that sub-group, except
/// synchrony, whose two fields are each optional. Absent sub-groups are
/// carried over. The result is built from scratch and owns all of its
/// storage; `params` and `update` are left untouched.
pub fn apply_update(params: &ConsensusParams, update: &proto::ConsensusParams) -> ConsensusParams {
    ConsensusParams {
        block: update.block.map_or(params.block, |b| BlockParams {
            max_bytes: b.max_bytes,
            max_gas: b.max_gas,
        }),
        evidence: update
            .evidence
            .as_ref()
            .map_or(params.evidence, |e| EvidenceParams {
                max_age_num_blocks: e.max_age_num_blocks,
                max_age_duration: duration_from_proto(e.max_age_duration.as_ref()),
                max_bytes: e.max_bytes,
            }),
        validator: match &update.validator {
            Some(v) => ValidatorParams {
                pub_key_types: v.pub_key_types.to_vec(),
            },
            None => params.validator.clone(),
        },
        version: update
            .version
            .map_or(params.version, |v| VersionParams { app: v.app }),
        abci: update.abci.map_or(params.abci, |a| AbciParams {
            vote_extensions_enable_height: a.vote_extensions_enable_height,
        }),
        synchrony: match &update.synchrony {
            Some(s) => SynchronyParams {
                precision: s
                    .precision
                    .as_ref()
                    .map_or(params.synchrony.precision, |d| duration_from_proto(Some(d))),
                message_delay: s
                    .message_delay
                    .as_ref()
                    .map_or(params.synchrony.message_delay, |d| {
                        duration_from_proto(Some(d))
                    }),
            },
            None => params.synchrony,
        },
        pbts: update.pbts.map_or(params.pbts, |p| PbtsParams {
            pbts_enable_height: p.pbts_enable_height,
        }),
    }
}

/// Names of the sub-groups `update` carries, in wire order.
pub fn updated_subgroups(update: &proto::ConsensusParams) -> Vec<&'static str> {
    [
        ("block", update.block.is_some()),
        ("evidence", update.evidence.is_some()),
        ("validator", update.validator.is_some()),
        ("version", update.version.is_some()),
        ("abci", update.abci.is_some()),
        ("synchrony", update.synchrony.is_some()),
        ("pbts", update.pbts.is_some()),
    ]
    .into_iter()
    .filter_map(|(name, present)| present.then_some(name))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_messages::codec::duration_to_proto;
    use meridian_types::Duration;

    #[test]
    fn empty_update_is_noop() {
        let params = ConsensusParams::defaults();
        let merged = apply_update(&params, &proto::ConsensusParams::default());
        assert_eq!(merged, params);
        assert!(updated_subgroups(&proto::ConsensusParams::default()).is_empty());
    }

    #[test]
    fn result_owns_its_key_types() {
        let params = ConsensusParams::defaults();
        let mut merged = apply_update(&params, &proto::ConsensusParams::default());
        merged.validator.pub_key_types.push("secp256k1".into());
        merged.validator.pub_key_types[0] = "changed".into();
        assert_eq!(params.validator.pub_key_types, vec!["ed25519".to_string()]);
    }

    #[test]
    fn validator_key_types_replaced_wholesale() {
        let params = ConsensusParams::defaults();
        let mut update = proto::ConsensusParams {
            validator: Some(proto::ValidatorParams {
                pub_key_types: vec!["secp256k1".into()],
            }),
            ..Default::default()
        };
        let merged = apply_update(&params, &update);
        assert_eq!(merged.validator.pub_key_types, vec!["secp256k1".to_string()]);

        if let Some(v) = update.validator.as_mut() {
            v.pub_key_types.push("ed25519".into());
        }
        assert_eq!(merged.validator.pub_key_types, vec!["secp256k1".to_string()]);
    }

    #[test]
    fn present_sub_group_overwrites_all_fields() {
        let params = ConsensusParams::defaults();
        let update = proto::ConsensusParams {
            evidence: Some(proto::EvidenceParams {
                max_age_num_blocks: 5,
                max_age_duration: None,
                max_bytes: 0,
            }),
            ..Default::default()
        };
        let merged = apply_update(&params, &update);
        assert_eq!(merged.evidence.max_age_num_blocks, 5);
        assert_eq!(merged.evidence.max_age_duration, Duration::ZERO);
        assert_eq!(merged.evidence.max_bytes, 0);
        assert_eq!(merged.block, params.block);
    }

    #[test]
    fn synchrony_fields_update_independently() {
        let params = ConsensusParams::defaults();
        let update = proto::ConsensusParams {
            synchrony: Some(proto::SynchronyParams {
                precision: None,
                message_delay: Some(duration_to_proto(Duration::from_secs(7))),
            }),
            ..Default::default()
        };
        let merged = apply_update(&params, &update);
        assert_eq!(merged.synchrony.precision, params.synchrony.precision);
        assert_eq!(merged.synchrony.message_delay, Duration::from_secs(7));
    }

    #[test]
    fn every_sub_group_applied() {
        let params = ConsensusParams::defaults();
        let update = proto::ConsensusParams {
            block: Some(proto::BlockParams {
                max_bytes: 100,
                max_gas: -1,
            }),
            version: Some(proto::VersionParams { app: 3 }),
            abci: Some(proto::AbciParams {
                vote_extensions_enable_height: 50,
            }),
            pbts: Some(proto::PbtsParams {
                pbts_enable_height: 70,
            }),
            ..Default::default()
        };
        let merged = apply_update(&params, &update);
        assert_eq!(merged.block.max_bytes, 100);
        assert_eq!(merged.block.max_gas, -1);
        assert_eq!(merged.version.app, 3);
        assert_eq!(merged.abci.vote_extensions_enable_height, 50);
        assert_eq!(merged.pbts.pbts_enable_height, 70);
        assert_eq!(merged.evidence, params.evidence);
        assert_eq!(
            updated_subgroups(&update),
            vec!["block", "version", "abci", "pbts"]
        );
    }
}
