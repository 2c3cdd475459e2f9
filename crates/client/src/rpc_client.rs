// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// rpc_client.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::account::Account;
use crate::context::{ClientContext, QueryTransport};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    ConsensusInfo, Msg, NodeStatus, RpcCommit, RpcRequest, RpcResponse, RpcValidators, SignedTx,
    TxBody, TxResponse,
};
use crate::tx_client::TxClient;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use spn_config::ClientConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// ABCI codes the SDK uses for missing objects (`ErrNotFound`, `ErrKeyNotFound`)
const ABCI_NOT_FOUND_CODES: [u32; 2] = [38, 22];
const VALIDATORS_PER_PAGE: u64 = 100;

/// JSON-RPC client for a Tendermint-based SPN node.
///
/// Implements [`TxClient`] and hands out a [`ClientContext`] whose transport
/// is the same HTTP session.
pub struct RpcClient {
    transport: Arc<HttpTransport>,
    context: ClientContext,
}

struct HttpTransport {
    base_address: Url,
    http_client: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Creates a new RPC client, with basic auth when both credentials are given.
    pub fn new(
        url: Url,
        rpc_user: Option<String>,
        rpc_pass: Option<String>,
        chain_id: impl Into<String>,
        address_prefix: impl Into<String>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let mut builder = Client::builder().timeout(timeout);

        if let (Some(user), Some(pass)) = (rpc_user, rpc_pass) {
            let auth = format!("{}:{}", user, pass);
            let encoded = general_purpose::STANDARD.encode(auth.as_bytes());
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Basic {}", encoded)
                    .parse()
                    .map_err(|e| ClientError::Config(format!("invalid credentials: {e}")))?,
            );
            builder = builder.default_headers(headers);
        }

        let http_client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("http client: {e}")))?;
        Ok(Self::with_client(http_client, url, chain_id, address_prefix))
    }

    /// Creates a new RPC client with an existing HTTP client
    pub fn with_client(
        client: Client,
        url: Url,
        chain_id: impl Into<String>,
        address_prefix: impl Into<String>,
    ) -> Self {
        let transport = Arc::new(HttpTransport {
            base_address: url,
            http_client: client,
            next_id: AtomicU64::new(1),
        });
        let context = ClientContext::new(chain_id, address_prefix, transport.clone());
        Self { transport, context }
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        config
            .validate()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        let url = Url::parse(&config.rpc_address)
            .map_err(|e| ClientError::Config(format!("rpc_address {}: {e}", config.rpc_address)))?;
        Self::new(
            url,
            config.rpc_user.clone(),
            config.rpc_pass.clone(),
            config.chain_id.clone(),
            config.address_prefix.clone(),
            config.request_timeout(),
        )
    }

    pub fn base_address(&self) -> &Url {
        &self.transport.base_address
    }

    fn sign(&self, account: &Account, msgs: Vec<Msg>) -> ClientResult<SignedTx> {
        let signer = account
            .address(self.context.address_prefix())
            .map_err(|e| ClientError::broadcast(format!("account {}: {e}", account.name())))?;
        let body = TxBody {
            chain_id: self.context.chain_id().to_string(),
            messages: msgs,
            memo: String::new(),
        };
        let sign_bytes = serde_json::to_vec(&body)
            .map_err(|e| ClientError::broadcast(format!("encode tx body: {e}")))?;
        let signature = account.sign(&sign_bytes);

        Ok(SignedTx {
            body,
            signer,
            pub_key: hex::encode(account.public_key()),
            signature: hex::encode(signature),
        })
    }

    async fn validators(&self, height: u64) -> ClientResult<Vec<crate::models::Validator>> {
        let mut validators = Vec::new();
        let mut page = 1u64;
        loop {
            let result = self
                .transport
                .call(
                    "validators",
                    json!({
                        "height": height.to_string(),
                        "page": page.to_string(),
                        "per_page": VALIDATORS_PER_PAGE.to_string(),
                    }),
                )
                .await?;
            let batch: RpcValidators = decode_result(result, "validators")?;
            let received = batch.validators.len() as u64;
            validators.extend(batch.validators);
            if received == 0 || validators.len() as u64 >= batch.total {
                return Ok(validators);
            }
            page += 1;
        }
    }
}

#[async_trait]
impl TxClient for RpcClient {
    fn context(&self) -> &ClientContext {
        &self.context
    }

    async fn broadcast_tx(&self, account: &Account, msgs: Vec<Msg>) -> ClientResult<TxResponse> {
        let message_count = msgs.len();
        let tx = self.sign(account, msgs)?;
        let tx_bytes = serde_json::to_vec(&tx)
            .map_err(|e| ClientError::broadcast(format!("encode tx: {e}")))?;

        debug!(signer = %tx.signer, messages = message_count, "broadcasting transaction");
        let result = self
            .transport
            .call(
                "broadcast_tx_commit",
                json!({ "tx": general_purpose::STANDARD.encode(tx_bytes) }),
            )
            .await
            .map_err(|e| match e {
                ClientError::Transport(message) => ClientError::Broadcast(message),
                other => other,
            })?;

        let commit: BroadcastCommit =
            decode_result(result, "broadcast_tx_commit").map_err(ClientError::broadcast)?;

        if commit.check_tx.code != 0 {
            warn!(code = commit.check_tx.code, log = %commit.check_tx.log, "transaction rejected by check_tx");
            return Err(ClientError::broadcast(format!(
                "check_tx rejected (code {}): {}",
                commit.check_tx.code, commit.check_tx.log
            )));
        }
        if commit.tx_result.code != 0 {
            warn!(code = commit.tx_result.code, log = %commit.tx_result.log, "transaction failed on execution");
            return Err(ClientError::broadcast(format!(
                "tx {} failed (code {}): {}",
                commit.hash, commit.tx_result.code, commit.tx_result.log
            )));
        }

        let height: u64 = commit.height.parse().map_err(|e| {
            ClientError::broadcast(format!("tx {} height {:?}: {e}", commit.hash, commit.height))
        })?;

        let data = match commit.tx_result.data.as_deref() {
            Some(encoded) if !encoded.is_empty() => general_purpose::STANDARD
                .decode(encoded)
                .map_err(|e| ClientError::broadcast(format!("tx {} data: {e}", commit.hash)))?,
            _ => Vec::new(),
        };

        Ok(TxResponse {
            tx_hash: commit.hash,
            height,
            code: 0,
            raw_log: commit.tx_result.log,
            data,
        })
    }

    async fn status(&self) -> ClientResult<NodeStatus> {
        let result = self.transport.call("status", json!({})).await?;
        decode_result(result, "status")
    }

    async fn consensus_info(&self, height: u64) -> ClientResult<ConsensusInfo> {
        let result = self
            .transport
            .call("commit", json!({ "height": height.to_string() }))
            .await?;
        let commit: RpcCommit = decode_result(result, "commit")?;
        let validator_set = self.validators(height).await?;
        let header = commit.signed_header.header;

        Ok(ConsensusInfo {
            height: header.height,
            timestamp: header.time,
            root: header.app_hash,
            next_validators_hash: header.next_validators_hash,
            validator_set,
        })
    }
}

impl HttpTransport {
    /// Sends a JSON-RPC call and returns its `result`.
    async fn call(&self, method: &str, params: Value) -> ClientResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);

        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::transport(format!("{method}: {e}")))?;

        let status = response.status();
        let content = response
            .text()
            .await
            .map_err(|e| ClientError::transport(format!("{method}: failed to read response: {e}")))?;

        let rpc_response: RpcResponse = serde_json::from_str(&content).map_err(|e| {
            ClientError::transport(format!("{method}: invalid response (http {status}): {e}"))
        })?;

        if let Some(error) = rpc_response.error {
            if error.is_height_unavailable() {
                return Err(ClientError::not_found(format!("{method}: {}", error.describe())));
            }
            return Err(ClientError::transport(format!("{method}: {}", error.describe())));
        }

        rpc_response
            .result
            .ok_or_else(|| ClientError::transport(format!("{method}: no result returned")))
    }
}

#[async_trait]
impl QueryTransport for HttpTransport {
    async fn query(
        &self,
        path: &str,
        data: Vec<u8>,
        height: Option<u64>,
    ) -> ClientResult<Vec<u8>> {
        let result = self
            .call(
                "abci_query",
                json!({
                    "path": path,
                    "data": hex::encode(data),
                    "height": height.unwrap_or(0).to_string(),
                    "prove": false,
                }),
            )
            .await?;
        let query: AbciQuery = decode_result(result, "abci_query")?;
        let response = query.response;

        if response.code != 0 {
            if ABCI_NOT_FOUND_CODES.contains(&response.code) || response.log.contains("not found")
            {
                return Err(ClientError::not_found(format!("{path}: {}", response.log)));
            }
            return Err(ClientError::transport(format!(
                "{path}: query failed (code {}): {}",
                response.code, response.log
            )));
        }

        match response.value {
            Some(value) if !value.is_empty() => general_purpose::STANDARD
                .decode(value)
                .map_err(|e| ClientError::decode(format!("{path}: {e}"))),
            _ => Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AbciQuery {
    response: AbciQueryResponse,
}

#[derive(Debug, Deserialize)]
struct AbciQueryResponse {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BroadcastCommit {
    check_tx: ExecResult,
    /// Older nodes call it `deliver_tx`
    #[serde(alias = "deliver_tx")]
    tx_result: ExecResult,
    hash: String,
    height: String,
}

#[derive(Debug, Deserialize)]
struct ExecResult {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    #[serde(default)]
    data: Option<String>,
}

fn decode_result<T: serde::de::DeserializeOwned>(result: Value, context: &str) -> ClientResult<T> {
    serde_json::from_value(result)
        .map_err(|e| ClientError::decode(format!("{context}: unexpected result: {e}")))
}
