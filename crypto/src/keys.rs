//! The known-key-type registry.
//!
//! A fixed table from short key-type identifiers to display names. It is
//! built at compile time and only ever read; validation borrows it.

use meridian_types::keys::{
    ED25519_PUB_KEY_NAME, KEY_TYPE_ED25519, KEY_TYPE_SECP256K1, SECP256K1_PUB_KEY_NAME,
};

/// Read-only mapping of key-type identifier to display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTypeRegistry {
    entries: &'static [(&'static str, &'static str)],
}

static STANDARD: KeyTypeRegistry = KeyTypeRegistry {
    entries: &[
        (KEY_TYPE_ED25519, ED25519_PUB_KEY_NAME),
        (KEY_TYPE_SECP256K1, SECP256K1_PUB_KEY_NAME),
    ],
};

impl KeyTypeRegistry {
    /// The registry of key types every node of the network knows about.
    pub fn standard() -> &'static KeyTypeRegistry {
        &STANDARD
    }

    /// A registry over a caller-supplied table.
    pub const fn from_static(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn contains(&self, key_type: &str) -> bool {
        self.name_of(key_type).is_some()
    }

    /// Display name for `key_type`, if registered.
    pub fn name_of(&self, key_type: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(id, _)| *id == key_type)
            .map(|(_, name)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_knows_ed25519_and_secp256k1() {
        let reg = KeyTypeRegistry::standard();
        assert_eq!(reg.name_of("ed25519"), Some("tendermint/PubKeyEd25519"));
        assert_eq!(reg.name_of("secp256k1"), Some("tendermint/PubKeySecp256k1"));
        assert!(!reg.contains("sr25519"));
        assert!(!reg.contains(""));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(!KeyTypeRegistry::standard().contains("Ed25519"));
    }

    #[test]
    fn custom_registry() {
        static ONLY_BLS: [(&str, &str); 1] = [("bls12_381", "cometbft/PubKeyBls12_381")];
        let reg = KeyTypeRegistry::from_static(&ONLY_BLS);
        assert!(reg.contains("bls12_381"));
        assert!(!reg.contains("ed25519"));
        assert_eq!(reg.name_of("bls12_381"), Some("cometbft/PubKeyBls12_381"));
    }
}
