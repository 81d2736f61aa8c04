#![no_main]

use libfuzzer_sys::fuzz_target;
use meridian_messages::proto;
use meridian_types::ConsensusParams;
use prost::Message;

fuzz_target!(|data: &[u8]| {
    // First 8 bytes pick the height, the rest is a wire-format update.
    if data.len() < 8 {
        return;
    }
    let height = i64::from_le_bytes(data[..8].try_into().expect("8 bytes"));
    let Ok(update) = proto::ConsensusParams::decode(&data[8..]) else {
        return;
    };

    let engine = meridian_governance::GovernanceEngine::standard();
    let params = ConsensusParams::defaults();
    let response = proto::FinalizeBlockResponse {
        consensus_param_updates: Some(update),
        app_hash: Vec::new(),
    };

    // Same inputs, same outcome.
    let first = engine.finalize_block(&params, &response, height);
    let second = engine.finalize_block(&params, &response, height);
    assert_eq!(first, second);

    match first {
        Ok(t) => {
            assert_eq!(engine.validate_basic(&t.params), Ok(()));
            assert_eq!(t.hash, engine.hash(&t.params));
        }
        Err(e) => assert_eq!(e.is_fatal(), height < 1),
    }
    // The input set is never modified.
    assert_eq!(params, ConsensusParams::defaults());
});
