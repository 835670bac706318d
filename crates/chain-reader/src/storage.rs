//! Storage key derivation for the map entries the reader touches.
//!
//! A map key is `twox128(pallet) ++ twox128(item) ++ hasher(key)`, where the
//! hasher depends on how the pallet declared the map.

use sp_core::{blake2_128, twox_128, twox_64};
use std::fmt;

use crate::address::Address;

/// Fully-qualified storage key as sent to `state_getStorage`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(Vec<u8>);

impl StorageKey {
    /// Key prefix shared by every entry of `pallet::item`.
    pub fn prefix(pallet: &str, item: &str) -> Self {
        let mut key = Vec::with_capacity(32);
        key.extend_from_slice(&twox_128(pallet.as_bytes()));
        key.extend_from_slice(&twox_128(item.as_bytes()));
        StorageKey(key)
    }

    /// Append a `Blake2_128Concat`-hashed map key.
    pub fn blake2_128_concat(mut self, key: &[u8]) -> Self {
        self.0.extend_from_slice(&blake2_128(key));
        self.0.extend_from_slice(key);
        self
    }

    /// Append a `Twox64Concat`-hashed map key.
    pub fn twox_64_concat(mut self, key: &[u8]) -> Self {
        self.0.extend_from_slice(&twox_64(key));
        self.0.extend_from_slice(key);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// `0x`-prefixed hex, the form the RPC expects.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

impl AsRef<[u8]> for StorageKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// `System::Account`, hashed with `Blake2_128Concat`.
pub fn system_account_key(address: &Address) -> StorageKey {
    StorageKey::prefix("System", "Account").blake2_128_concat(address.as_bytes())
}

/// `Identity::IdentityOf`, hashed with `Twox64Concat`.
pub fn identity_of_key(address: &Address) -> StorageKey {
    StorageKey::prefix("Identity", "IdentityOf").twox_64_concat(address.as_bytes())
}
