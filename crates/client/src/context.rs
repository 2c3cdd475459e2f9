// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// context.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Raw ABCI query access to a node.
///
/// Implementations must return `ClientError::NotFound` when the queried
/// object does not exist, and `ClientError::Transport` for everything the
/// remote side could not answer.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Runs `path` with an encoded request and returns the encoded response.
    /// `height` pins the query to a historical block; `None` means latest.
    async fn query(&self, path: &str, data: Vec<u8>, height: Option<u64>)
        -> ClientResult<Vec<u8>>;
}

/// Connection context shared by every query handle derived from one client.
///
/// Cloning is cheap and keeps the same underlying session.
#[derive(Clone)]
pub struct ClientContext {
    chain_id: String,
    address_prefix: String,
    transport: Arc<dyn QueryTransport>,
}

impl ClientContext {
    pub fn new(
        chain_id: impl Into<String>,
        address_prefix: impl Into<String>,
        transport: Arc<dyn QueryTransport>,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            address_prefix: address_prefix.into(),
            transport,
        }
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn address_prefix(&self) -> &str {
        &self.address_prefix
    }

    pub fn transport(&self) -> &Arc<dyn QueryTransport> {
        &self.transport
    }

    /// Returns true when both contexts talk through the same transport instance.
    pub fn same_session(&self, other: &ClientContext) -> bool {
        Arc::ptr_eq(&self.transport, &other.transport)
    }

    /// Sends a JSON-encoded request to `path` and decodes the JSON response.
    pub async fn query<Req, Resp>(&self, path: &str, request: &Req) -> ClientResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let data = serde_json::to_vec(request)
            .map_err(|e| ClientError::decode(format!("{path}: encode request: {e}")))?;
        trace!(path, chain_id = %self.chain_id, "abci query");
        let bytes = self.transport.query(path, data, None).await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::decode(format!("{path}: decode response: {e}")))
    }
}

impl fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientContext")
            .field("chain_id", &self.chain_id)
            .field("address_prefix", &self.address_prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct EchoTransport {
        paths: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl QueryTransport for EchoTransport {
        async fn query(
            &self,
            path: &str,
            data: Vec<u8>,
            _height: Option<u64>,
        ) -> ClientResult<Vec<u8>> {
            self.paths.lock().unwrap().push(path.to_string());
            Ok(data)
        }
    }

    #[tokio::test]
    async fn query_round_trips_json() {
        let transport = Arc::new(EchoTransport::default());
        let ctx = ClientContext::new("spn-1", "spn", transport.clone());

        let value: serde_json::Value = ctx.query("/test/Echo", &json!({"a": 1})).await.unwrap();
        assert_eq!(value, json!({"a": 1}));
        assert_eq!(*transport.paths.lock().unwrap(), vec!["/test/Echo"]);
    }

    #[test]
    fn clones_share_session() {
        let ctx = ClientContext::new("spn-1", "spn", Arc::new(EchoTransport::default()));
        let other = ClientContext::new("spn-1", "spn", Arc::new(EchoTransport::default()));
        assert!(ctx.same_session(&ctx.clone()));
        assert!(!ctx.same_session(&other));
    }
}
