//! Validator public-key type identifiers.
//!
//! The short identifier is what appears in `ValidatorParams::pub_key_types`;
//! the long name is the amino-style display name of the key type.

pub const KEY_TYPE_ED25519: &str = "ed25519";
pub const KEY_TYPE_SECP256K1: &str = "secp256k1";

pub const ED25519_PUB_KEY_NAME: &str = "tendermint/PubKeyEd25519";
pub const SECP256K1_PUB_KEY_NAME: &str = "tendermint/PubKeySecp256k1";
