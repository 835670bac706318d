//! Connection settings

use std::time::Duration;

/// Public Polkadot relay chain endpoint.
pub const DEFAULT_ENDPOINT: &str = "wss://rpc.polkadot.io";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// WebSocket RPC endpoint of the node
    pub endpoint: String,

    /// Deadline for a single request
    pub request_timeout: Duration,

    /// Deadline for the WebSocket handshake
    pub connection_timeout: Duration,

    /// Largest response accepted from the node, in bytes
    pub max_response_size: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(30),
            connection_timeout: Duration::from_secs(10),
            max_response_size: 10 * 1024 * 1024,
        }
    }
}

impl ReaderConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn with_max_response_size(mut self, bytes: u32) -> Self {
        self.max_response_size = bytes;
        self
    }
}
