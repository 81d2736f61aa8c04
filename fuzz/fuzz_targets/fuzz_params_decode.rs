#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic; it either yields a params
    // set or a decode/contract error.
    let Ok(params) = meridian_messages::decode_params(data) else {
        return;
    };

    // Whatever decoded must re-encode to bytes that decode to the same set.
    let encoded = meridian_messages::encode_params(&params);
    let again = meridian_messages::decode_params(&encoded).expect("re-encoded params decode");
    assert_eq!(again, params);

    // Validation and hashing are total over any decoded set.
    let engine = meridian_governance::GovernanceEngine::standard();
    let _ = engine.validate_basic(&params);
    assert_eq!(engine.hash(&params), engine.hash(&again));
});
