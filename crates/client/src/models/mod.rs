//! Wire and domain models used by the client.

mod common;
mod consensus_info;
mod node_status;
mod rpc_request;
mod tx;

pub(crate) use consensus_info::{RpcCommit, RpcValidators};

pub use consensus_info::{ConsensusInfo, PubKey, Validator};
pub use node_status::{NodeInfo, NodeStatus, SyncInfo};
pub use rpc_request::{RpcRequest, RpcResponse, RpcResponseError};
pub use tx::{Msg, SignedTx, TxBody, TxMsgData, TxResponse, TypedMsg};
