//! WebSocket RPC client for Substrate nodes

use async_trait::async_trait;
use jsonrpsee::{
    core::{client::ClientT, params::ArrayParams},
    rpc_params,
    ws_client::{WsClient, WsClientBuilder},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sp_core::H256;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::backend::ChainBackend;
use crate::chain_info::BlockHeader;
use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::storage::StorageKey;

/// RPC client for blockchain interaction
pub struct RpcClient {
    client: RwLock<Option<WsClient>>,
    config: ReaderConfig,
}

impl RpcClient {
    /// Create a client; no connection is made until [`RpcClient::connect`].
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            client: RwLock::new(None),
            config,
        }
    }

    /// Create a client and connect it in one step.
    pub async fn connect_to(config: ReaderConfig) -> Result<Self> {
        let client = Self::new(config);
        client.connect().await?;
        Ok(client)
    }

    /// Open the WebSocket session, replacing any previous one.
    pub async fn connect(&self) -> Result<()> {
        info!("Connecting to node at {}", self.config.endpoint);

        let client = WsClientBuilder::default()
            .request_timeout(self.config.request_timeout)
            .connection_timeout(self.config.connection_timeout)
            .max_response_size(self.config.max_response_size)
            .build(&self.config.endpoint)
            .await
            .map_err(|e| Error::Connection(format!("{}: {}", self.config.endpoint, e)))?;

        *self.client.write().await = Some(client);

        info!("Connected to {}", self.config.endpoint);
        Ok(())
    }

    /// Drop the session. Lookups after this fail with a connection error.
    pub async fn disconnect(&self) {
        if self.client.write().await.take().is_some() {
            debug!("Disconnected from {}", self.config.endpoint);
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    async fn request<R: DeserializeOwned>(&self, method: &str, params: ArrayParams) -> Result<R> {
        let client = self.client.read().await;
        let client = client
            .as_ref()
            .ok_or_else(|| Error::Connection(format!("not connected to {}", self.config.endpoint)))?;

        debug!("RPC call: {}", method);
        Ok(client.request(method, params).await?)
    }
}

#[async_trait]
impl ChainBackend for RpcClient {
    async fn storage(&self, key: &StorageKey) -> Result<Option<Vec<u8>>> {
        debug!("state_getStorage {}", key);

        let value: Option<String> = self.request("state_getStorage", rpc_params![key.to_hex()]).await?;

        match value {
            None => Ok(None),
            Some(hex_data) => Ok(Some(hex::decode(hex_data.trim_start_matches("0x"))?)),
        }
    }

    async fn chain_name(&self) -> Result<String> {
        self.request("system_chain", rpc_params![]).await
    }

    async fn finalized_block_number(&self) -> Result<u64> {
        let hash: H256 = self.request("chain_getFinalizedHead", rpc_params![]).await?;

        let header: Option<BlockHeader> = self.request("chain_getHeader", rpc_params![hash]).await?;

        header
            .map(|h| h.number)
            .ok_or_else(|| Error::Decode(format!("no header for finalized block {:?}", hash)))
    }

    async fn properties(&self) -> Result<Map<String, Value>> {
        self.request("system_properties", rpc_params![]).await
    }

    async fn is_live(&self) -> bool {
        self.client
            .read()
            .await
            .as_ref()
            .map(|c| c.is_connected())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconnected_client_reports_connection_error() {
        let client = RpcClient::new(ReaderConfig::new("ws://127.0.0.1:1"));
        assert!(!client.is_live().await);

        let err = client.chain_name().await.unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }

    #[tokio::test]
    async fn test_refused_connection_is_connection_error() {
        let config = ReaderConfig::new("ws://127.0.0.1:1")
            .with_connection_timeout(std::time::Duration::from_secs(2));
        let err = RpcClient::connect_to(config).await.err().unwrap();
        assert!(matches!(err, Error::Connection(_)));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_connect_public_endpoint() {
        let client = RpcClient::connect_to(ReaderConfig::default()).await.unwrap();
        assert!(client.is_live().await);

        let name = client.chain_name().await.unwrap();
        assert_eq!(name, "Polkadot");
    }
}
