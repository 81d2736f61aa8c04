//! Cryptographic primitives for Meridian parameter governance.
//!
//! - **SHA-256** (`tmhash`) for the header commitment of the consensus params
//! - The **known-key-type registry** consulted when validating
//!   `ValidatorParams::pub_key_types`

pub mod hash;
pub mod keys;

pub use hash::{tmhash, TMHASH_SIZE};
pub use keys::KeyTypeRegistry;
