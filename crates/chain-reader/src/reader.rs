//! Typed state reader
//!
//! Each lookup is one stateless request against an already-established
//! backend. Lookups share the backend read-only, so any number of them may be
//! in flight at once; none of them retry, cache or apply their own timeout.

use sp_core::U256;
use std::sync::Arc;
use tracing::debug;

use crate::address::Address;
use crate::backend::ChainBackend;
use crate::balance::AccountBalance;
use crate::chain_info::{ChainInfo, ChainProperties};
use crate::error::Result;
use crate::identity::{DisplayName, Registration};
use crate::storage::{identity_of_key, system_account_key};

/// Balance and display name of one account, read together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub address: Address,
    pub balance: AccountBalance,
    pub display_name: DisplayName,
}

pub struct StateReader<B: ?Sized> {
    backend: Arc<B>,
}

impl<B: ?Sized> Clone for StateReader<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: ChainBackend> StateReader<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}

impl<B: ChainBackend + ?Sized> StateReader<B> {
    pub fn from_shared(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    pub async fn is_live(&self) -> bool {
        self.backend.is_live().await
    }

    /// Total balance (`free + reserved`). Unknown accounts have a zero balance.
    pub async fn balance(&self, address: &Address) -> Result<U256> {
        Ok(self.account_balance(address).await?.total())
    }

    /// Full `System::Account` snapshot.
    pub async fn account_balance(&self, address: &Address) -> Result<AccountBalance> {
        let key = system_account_key(address);
        let raw = self.backend.storage(&key).await?;
        debug!(%address, found = raw.is_some(), "System::Account");

        AccountBalance::from_storage(raw.as_deref())
    }

    /// Identity registration, if the account has one.
    pub async fn identity(&self, address: &Address) -> Result<Option<Registration>> {
        let key = identity_of_key(address);
        let raw = self.backend.storage(&key).await?;
        debug!(%address, found = raw.is_some(), "Identity::IdentityOf");

        raw.as_deref().map(Registration::from_storage).transpose()
    }

    /// Display name with the reason for any absence.
    pub async fn lookup_display_name(&self, address: &Address) -> Result<DisplayName> {
        let key = identity_of_key(address);
        let raw = self.backend.storage(&key).await?;
        debug!(%address, found = raw.is_some(), "Identity::IdentityOf");

        DisplayName::from_storage(raw.as_deref())
    }

    /// Display name as text; `None` covers every valid kind of absence.
    pub async fn display_name(&self, address: &Address) -> Result<Option<String>> {
        Ok(self.lookup_display_name(address).await?.into_option())
    }

    /// Chain name and finalized height. Always re-queried.
    pub async fn chain_info(&self) -> Result<ChainInfo> {
        let (name, finalized_block_number) =
            tokio::try_join!(self.backend.chain_name(), self.backend.finalized_block_number())?;

        Ok(ChainInfo { name, finalized_block_number })
    }

    pub async fn chain_properties(&self) -> Result<ChainProperties> {
        let map = self.backend.properties().await?;
        Ok(ChainProperties::from_map(&map))
    }

    /// Balance and display name fetched concurrently. Either failure fails the
    /// whole summary.
    pub async fn account_summary(&self, address: &Address) -> Result<AccountSummary> {
        let (balance, display_name) =
            tokio::try_join!(self.account_balance(address), self.lookup_display_name(address))?;

        Ok(AccountSummary {
            address: address.clone(),
            balance,
            display_name,
        })
    }
}
