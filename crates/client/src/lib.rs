// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// lib.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! SPN Client Library
//!
//! Transaction broadcasting, node status and the shared query context used
//! by every query handle of the launch-network façade. [`RpcClient`] talks
//! to a Tendermint JSON-RPC endpoint; anything implementing [`TxClient`] can
//! stand in for it.

pub mod models;
mod account;
mod context;
mod error;
mod rpc_client;
mod tx_client;

pub use account::Account;
pub use context::{ClientContext, QueryTransport};
pub use error::{ClientError, ClientResult};
pub use rpc_client::RpcClient;
pub use tx_client::TxClient;

// Re-export commonly used types
pub use models::{ConsensusInfo, Msg, NodeStatus, TxResponse, TypedMsg};
