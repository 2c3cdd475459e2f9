// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// error.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by transaction clients and query transports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connectivity failure, timeout, or a node-side RPC error.
    #[error("transport error: {0}")]
    Transport(String),
    /// Signing failure or rejection of a submitted transaction.
    #[error("broadcast failed: {0}")]
    Broadcast(String),
    /// The requested resource (object, height) does not exist on the node.
    #[error("not found: {0}")]
    NotFound(String),
    /// A payload could not be encoded or decoded.
    #[error("decode error: {0}")]
    Decode(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn transport<E: ToString>(err: E) -> Self {
        ClientError::Transport(err.to_string())
    }

    pub fn broadcast<E: ToString>(err: E) -> Self {
        ClientError::Broadcast(err.to_string())
    }

    pub fn not_found<E: ToString>(err: E) -> Self {
        ClientError::NotFound(err.to_string())
    }

    pub fn decode<E: ToString>(err: E) -> Self {
        ClientError::Decode(err.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
