//! Scripted collaborators shared by the façade tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use spn_client::models::{NodeInfo, SyncInfo};
use spn_client::{
    Account, ClientContext, ClientError, ClientResult, ConsensusInfo, Msg, NodeStatus,
    QueryTransport, TxClient, TxResponse,
};
use spn_network::query::{StakingParams, StakingQuery, StakingValidator};
use spn_network::{Chain, ChainError, ChainResult};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const CHAIN_ID: &str = "spn-1";
pub const PREFIX: &str = "spn";
pub const SECRET: &str = "0101010101010101010101010101010101010101010101010101010101010101";

pub fn account() -> Account {
    Account::from_secret_hex("alice", SECRET).unwrap()
}

/// Answers ABCI queries from a path-keyed table and records every path asked.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<HashMap<String, Value>>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, path: &str, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), body);
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryTransport for ScriptedTransport {
    async fn query(
        &self,
        path: &str,
        _data: Vec<u8>,
        _height: Option<u64>,
    ) -> ClientResult<Vec<u8>> {
        self.seen.lock().unwrap().push(path.to_string());
        let body = self.responses.lock().unwrap().get(path).cloned();
        match body {
            Some(body) => Ok(serde_json::to_vec(&body).unwrap()),
            None => Err(ClientError::not_found(path)),
        }
    }
}

/// Transaction client that records broadcasts and answers with canned data.
pub struct FakeTxClient {
    ctx: ClientContext,
    pub broadcasts: Mutex<Vec<Vec<Msg>>>,
    pub tx_data: Value,
    pub known_height: u64,
    pub status_calls: AtomicUsize,
}

impl FakeTxClient {
    pub fn new(transport: Arc<ScriptedTransport>) -> Arc<Self> {
        Arc::new(Self {
            ctx: ClientContext::new(CHAIN_ID, PREFIX, transport),
            broadcasts: Mutex::new(Vec::new()),
            tx_data: json!({ "msg_responses": [{}] }),
            known_height: 100,
            status_calls: AtomicUsize::new(0),
        })
    }

    pub fn broadcast_count(&self) -> usize {
        self.broadcasts.lock().unwrap().len()
    }
}

#[async_trait]
impl TxClient for FakeTxClient {
    fn context(&self) -> &ClientContext {
        &self.ctx
    }

    async fn broadcast_tx(&self, _account: &Account, msgs: Vec<Msg>) -> ClientResult<TxResponse> {
        self.broadcasts.lock().unwrap().push(msgs);
        Ok(TxResponse {
            tx_hash: "ABCD".into(),
            height: self.known_height,
            data: serde_json::to_vec(&self.tx_data).unwrap(),
            ..Default::default()
        })
    }

    async fn status(&self) -> ClientResult<NodeStatus> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        Ok(NodeStatus {
            node_info: NodeInfo {
                id: "a1b2c3".into(),
                network: "orbit-1".into(),
                moniker: "local".into(),
                version: "0.37.0".into(),
            },
            sync_info: SyncInfo {
                latest_block_height: self.known_height,
                latest_block_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
                catching_up: false,
            },
        })
    }

    async fn consensus_info(&self, height: u64) -> ClientResult<ConsensusInfo> {
        if height > self.known_height {
            return Err(ClientError::not_found(format!("height {height}")));
        }
        Ok(ConsensusInfo {
            height,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            root: "ROOT".into(),
            next_validators_hash: "NEXT".into(),
            validator_set: Vec::new(),
        })
    }
}

/// Staking handle with a fixed unbonding time.
pub struct FakeStaking {
    pub unbonding_time: &'static str,
}

#[async_trait]
impl StakingQuery for FakeStaking {
    async fn validator(&self, operator_address: &str) -> ClientResult<StakingValidator> {
        Ok(StakingValidator {
            operator_address: operator_address.to_string(),
            jailed: false,
            status: "BOND_STATUS_BONDED".into(),
            tokens: "1000".into(),
            delegator_shares: "1000".into(),
            description: Value::Null,
        })
    }

    async fn params(&self) -> ClientResult<StakingParams> {
        Ok(StakingParams {
            unbonding_time: self.unbonding_time.to_string(),
            max_validators: 100,
            max_entries: 7,
            historical_entries: 10000,
            bond_denom: "stake".into(),
        })
    }
}

/// Local chain stand-in that records the side effects it was asked for.
pub struct FakeChain {
    pub chain_id: String,
    pub cached: Mutex<Vec<u64>>,
    pub genesis_resets: AtomicUsize,
}

impl FakeChain {
    pub fn new(chain_id: &str) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            cached: Mutex::new(Vec::new()),
            genesis_resets: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Chain for FakeChain {
    fn id(&self) -> ChainResult<String> {
        Ok("github.com/acme/orbit@abc123".into())
    }

    fn chain_id(&self) -> ChainResult<String> {
        Ok(self.chain_id.clone())
    }

    fn name(&self) -> &str {
        "orbit"
    }

    fn source_url(&self) -> &str {
        "https://github.com/acme/orbit"
    }

    fn source_hash(&self) -> &str {
        "abc123"
    }

    fn genesis_path(&self) -> ChainResult<PathBuf> {
        Ok(PathBuf::from("/home/orbit/config/genesis.json"))
    }

    fn gentxs_path(&self) -> ChainResult<PathBuf> {
        Ok(PathBuf::from("/home/orbit/config/gentx"))
    }

    fn default_gentx_path(&self) -> ChainResult<PathBuf> {
        Ok(PathBuf::from("/home/orbit/config/gentx/gentx.json"))
    }

    fn app_toml_path(&self) -> ChainResult<PathBuf> {
        Err(ChainError::PathNotConfigured("app.toml"))
    }

    fn config_toml_path(&self) -> ChainResult<PathBuf> {
        Err(ChainError::PathNotConfigured("config.toml"))
    }

    async fn node_id(&self) -> ChainResult<String> {
        Ok("e3f1a9".into())
    }

    fn cache_binary(&self, launch_id: u64) -> ChainResult<()> {
        self.cached.lock().unwrap().push(launch_id);
        Ok(())
    }

    fn reset_genesis_time(&self) -> ChainResult<()> {
        self.genesis_resets.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn chain_launch(launch_id: u64, triggered: bool) -> Value {
    json!({
        "chain": {
            "launch_id": launch_id,
            "coordinator_id": 1,
            "genesis_chain_id": "orbit-1",
            "source_url": "https://github.com/acme/orbit",
            "source_hash": "abc123",
            "launch_triggered": triggered,
            "launch_time": if triggered { 1_714_564_800 } else { 0 }
        }
    })
}

pub fn launch_params(min: i64, max: i64) -> Value {
    json!({
        "params": {
            "launch_time_range": { "min_launch_time": min, "max_launch_time": max }
        }
    })
}
