// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// tx_client.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::account::Account;
use crate::context::ClientContext;
use crate::error::ClientResult;
use crate::models::{ConsensusInfo, Msg, NodeStatus, TxResponse};
use async_trait::async_trait;

/// Signing, broadcasting and node-status access to a ledger.
///
/// Every async operation is cancelled by dropping its future. Nothing here
/// retries: a failed broadcast may or may not have reached the mempool.
#[async_trait]
pub trait TxClient: Send + Sync {
    /// Shared query context; a plain accessor.
    fn context(&self) -> &ClientContext;

    /// Signs `msgs` with `account` and submits them in one transaction.
    async fn broadcast_tx(&self, account: &Account, msgs: Vec<Msg>) -> ClientResult<TxResponse>;

    async fn status(&self) -> ClientResult<NodeStatus>;

    /// Fails with `ClientError::NotFound` when `height` is unknown or pruned.
    async fn consensus_info(&self, height: u64) -> ClientResult<ConsensusInfo>;
}
