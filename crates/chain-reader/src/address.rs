//! SS58 account addresses

use crate::error::{Error, Result};
use sp_core::crypto::{AccountId32, Ss58AddressFormat, Ss58Codec};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Prefix used for addresses built from raw keys.
pub const GENERIC_SS58_FORMAT: u16 = 42;

/// A validated account address.
///
/// Parsing happens up front so a malformed address is rejected before any
/// request reaches the node. The network prefix it was written with is kept
/// for display; equality only looks at the account key.
#[derive(Debug, Clone)]
pub struct Address {
    account: AccountId32,
    format: Ss58AddressFormat,
}

impl Address {
    /// Parse an SS58-encoded address.
    pub fn parse(s: &str) -> Result<Self> {
        let (account, format) = AccountId32::from_ss58check_with_version(s.trim())
            .map_err(|e| Error::InvalidAddress(format!("{}: {:?}", s, e)))?;
        Ok(Self { account, format })
    }

    /// Same account, displayed with another network prefix.
    pub fn with_ss58_format(self, prefix: u16) -> Self {
        Self { format: Ss58AddressFormat::custom(prefix), ..self }
    }

    pub fn ss58_format(&self) -> u16 {
        self.format.prefix()
    }

    /// Raw 32-byte account key.
    pub fn account_id(&self) -> &AccountId32 {
        &self.account
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.account.as_ref()
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.account == other.account
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.account.hash(state);
    }
}

impl From<AccountId32> for Address {
    fn from(account: AccountId32) -> Self {
        Self { account, format: Ss58AddressFormat::custom(GENERIC_SS58_FORMAT) }
    }
}

impl From<[u8; 32]> for Address {
    fn from(raw: [u8; 32]) -> Self {
        AccountId32::from(raw).into()
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.account.to_ss58check_with_version(self.format))
    }
}
