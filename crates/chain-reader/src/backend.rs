//! Node access seam used by the reader

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::Result;
use crate::storage::StorageKey;

/// Read-only view of a node.
///
/// Implementations must be safe to share between concurrent lookups; the
/// reader never mutates or closes the underlying session.
#[async_trait]
pub trait ChainBackend: Send + Sync {
    /// Point lookup of a storage value at the best block; `None` if unset.
    async fn storage(&self, key: &StorageKey) -> Result<Option<Vec<u8>>>;

    /// Chain name (`system_chain`).
    async fn chain_name(&self) -> Result<String>;

    /// Number of the latest finalized block.
    async fn finalized_block_number(&self) -> Result<u64>;

    /// Raw `system_properties` map.
    async fn properties(&self) -> Result<Map<String, Value>>;

    /// Whether the transport session is still up.
    async fn is_live(&self) -> bool;
}

#[async_trait]
impl<T: ChainBackend + ?Sized> ChainBackend for Arc<T> {
    async fn storage(&self, key: &StorageKey) -> Result<Option<Vec<u8>>> {
        (**self).storage(key).await
    }

    async fn chain_name(&self) -> Result<String> {
        (**self).chain_name().await
    }

    async fn finalized_block_number(&self) -> Result<u64> {
        (**self).finalized_block_number().await
    }

    async fn properties(&self) -> Result<Map<String, Value>> {
        (**self).properties().await
    }

    async fn is_live(&self) -> bool {
        (**self).is_live().await
    }
}
