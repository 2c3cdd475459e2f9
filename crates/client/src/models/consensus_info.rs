// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// consensus_info.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::common::{de_str_i64, de_str_u64};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Consensus state of a chain at one height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusInfo {
    pub height: u64,
    pub timestamp: DateTime<Utc>,
    /// App hash committed at `height`
    pub root: String,
    pub next_validators_hash: String,
    pub validator_set: Vec<Validator>,
}

/// Validator entry of a consensus validator set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub address: String,
    pub pub_key: PubKey,
    #[serde(deserialize_with = "de_str_i64")]
    pub voting_power: i64,
    #[serde(default, deserialize_with = "de_str_i64")]
    pub proposer_priority: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

/// `commit` endpoint result
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RpcCommit {
    pub signed_header: RpcSignedHeader,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RpcSignedHeader {
    pub header: RpcHeader,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RpcHeader {
    #[serde(deserialize_with = "de_str_u64")]
    pub height: u64,
    pub time: DateTime<Utc>,
    pub app_hash: String,
    pub next_validators_hash: String,
}

/// `validators` endpoint result
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RpcValidators {
    pub validators: Vec<Validator>,
    #[serde(default, deserialize_with = "de_str_u64")]
    pub total: u64,
}
