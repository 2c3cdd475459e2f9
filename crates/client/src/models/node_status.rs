// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// node_status.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::common::de_str_u64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Node status as reported by the Tendermint `status` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub node_info: NodeInfo,
    pub sync_info: SyncInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Node id (hex of the p2p key address)
    pub id: String,
    /// Chain id the node belongs to
    pub network: String,
    pub moniker: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncInfo {
    #[serde(deserialize_with = "de_str_u64")]
    pub latest_block_height: u64,
    pub latest_block_time: DateTime<Utc>,
    #[serde(default)]
    pub catching_up: bool,
}

impl NodeStatus {
    pub fn chain_id(&self) -> &str {
        &self.node_info.network
    }

    pub fn latest_height(&self) -> u64 {
        self.sync_info.latest_block_height
    }
}
