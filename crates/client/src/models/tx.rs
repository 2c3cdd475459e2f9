// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// tx.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{ClientError, ClientResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A domain message carried by a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Msg {
    /// Fully-qualified message type, e.g. `/spn.launch.MsgTriggerLaunch`
    pub type_url: String,
    pub value: serde_json::Value,
}

impl Msg {
    pub fn new<T: TypedMsg>(msg: &T) -> ClientResult<Self> {
        let value = serde_json::to_value(msg)
            .map_err(|e| ClientError::decode(format!("{}: {e}", T::TYPE_URL)))?;
        Ok(Self {
            type_url: T::TYPE_URL.to_string(),
            value,
        })
    }
}

/// A message type with a well-known type url.
pub trait TypedMsg: Serialize {
    const TYPE_URL: &'static str;
}

/// Unsigned transaction body; its JSON encoding is what gets signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxBody {
    pub chain_id: String,
    pub messages: Vec<Msg>,
    #[serde(default)]
    pub memo: String,
}

/// Signed transaction envelope submitted to the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedTx {
    pub body: TxBody,
    pub signer: String,
    /// Hex-encoded compressed public key
    pub pub_key: String,
    /// Hex-encoded compact signature over the JSON body
    pub signature: String,
}

/// Result of a committed transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxResponse {
    pub tx_hash: String,
    pub height: u64,
    pub code: u32,
    pub raw_log: String,
    /// Encoded `TxMsgData` returned by the chain
    pub data: Vec<u8>,
}

/// Per-message responses packed into `TxResponse::data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxMsgData {
    #[serde(default)]
    pub msg_responses: Vec<serde_json::Value>,
}

impl TxResponse {
    /// Decodes the first message response into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> ClientResult<T> {
        let msg_data: TxMsgData = serde_json::from_slice(&self.data)
            .map_err(|e| ClientError::decode(format!("tx {}: {e}", self.tx_hash)))?;
        let first = msg_data.msg_responses.into_iter().next().ok_or_else(|| {
            ClientError::decode(format!("tx {}: no message responses", self.tx_hash))
        })?;
        serde_json::from_value(first)
            .map_err(|e| ClientError::decode(format!("tx {}: {e}", self.tx_hash)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct MsgPing {
        nonce: u64,
    }

    impl TypedMsg for MsgPing {
        const TYPE_URL: &'static str = "/test.MsgPing";
    }

    #[test]
    fn typed_msg_carries_type_url() {
        let msg = Msg::new(&MsgPing { nonce: 7 }).unwrap();
        assert_eq!(msg.type_url, "/test.MsgPing");
        assert_eq!(msg.value, json!({"nonce": 7}));
    }

    #[test]
    fn decode_reads_first_response() {
        let response = TxResponse {
            tx_hash: "AB".into(),
            data: serde_json::to_vec(&json!({"msg_responses": [{"id": 3}, {"id": 4}]})).unwrap(),
            ..Default::default()
        };

        #[derive(Deserialize)]
        struct Out {
            id: u64,
        }

        assert_eq!(response.decode::<Out>().unwrap().id, 3);
    }

    #[test]
    fn decode_fails_without_responses() {
        let response = TxResponse {
            data: br#"{"msg_responses": []}"#.to_vec(),
            ..Default::default()
        };
        assert!(matches!(
            response.decode::<serde_json::Value>(),
            Err(ClientError::Decode(_))
        ));
    }
}
