// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// rpc_request.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub id: u64,

    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    pub method: String,

    /// Tendermint takes named parameters
    pub params: Value,
}

impl RpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Value) -> Self {
        Self {
            id,
            json_rpc: "2.0".to_string(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Value,

    #[serde(rename = "jsonrpc", default)]
    pub json_rpc: String,

    #[serde(default)]
    pub result: Option<Value>,

    #[serde(default)]
    pub error: Option<RpcResponseError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponseError {
    pub code: i64,
    pub message: String,
    /// Tendermint puts the actual reason here
    #[serde(default)]
    pub data: Option<Value>,
}

impl RpcResponseError {
    /// Message plus detail, as a single line
    pub fn describe(&self) -> String {
        match &self.data {
            Some(Value::String(data)) => format!("{} ({}): {}", self.message, self.code, data),
            Some(other) => format!("{} ({}): {}", self.message, self.code, other),
            None => format!("{} ({})", self.message, self.code),
        }
    }

    /// Tendermint reports unknown or pruned heights through the error detail
    pub fn is_height_unavailable(&self) -> bool {
        let detail = match &self.data {
            Some(Value::String(data)) => data.as_str(),
            _ => return false,
        };
        detail.contains("height")
            && (detail.contains("not available")
                || detail.contains("must be less than or equal")
                || detail.contains("could not find"))
    }
}
