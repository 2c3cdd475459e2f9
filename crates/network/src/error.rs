use crate::chain::ChainError;
use spn_client::ClientError;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type for façade operations.
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Rejections of an external object identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    #[error("error parsing ID: {0}")]
    Parse(#[from] ParseIntError),
    #[error("ID must be greater than 0")]
    Zero,
}

/// Errors returned by the launch-network façade.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error(transparent)]
    ParseId(#[from] ParseIdError),

    /// A collaborator call failed; `id` names the object it was about.
    #[error("{operation} failed for {id}: {source}")]
    Query {
        operation: &'static str,
        id: String,
        #[source]
        source: ClientError,
    },

    #[error("{operation} failed: {source}")]
    Client {
        operation: &'static str,
        #[source]
        source: ClientError,
    },

    #[error("{kind} {id} not found")]
    ObjectNotFound { kind: &'static str, id: String },

    #[error("{0} query handle is not configured")]
    SubsystemUnavailable(&'static str),

    #[error(
        "remaining time {remaining_secs}s outside launch time range [{min_secs}s, {max_secs}s]"
    )]
    LaunchTimeOutOfRange {
        remaining_secs: u64,
        min_secs: u64,
        max_secs: u64,
    },

    #[error("chain {0} launch has not been triggered yet")]
    LaunchNotTriggered(u64),

    #[error("chain {0} launch is already triggered")]
    LaunchAlreadyTriggered(u64),

    #[error("launch {launch_id} expects chain id {expected}, local chain is {actual}")]
    ChainIdMismatch {
        launch_id: u64,
        expected: String,
        actual: String,
    },

    #[error("chain {operation} failed: {source}")]
    Chain {
        operation: &'static str,
        #[source]
        source: ChainError,
    },
}

impl NetworkError {
    /// Wraps a collaborator failure with the operation and object it concerned.
    pub(crate) fn query(
        operation: &'static str,
        id: impl ToString,
    ) -> impl FnOnce(ClientError) -> Self {
        let id = id.to_string();
        move |source| NetworkError::Query {
            operation,
            id,
            source,
        }
    }

    /// Like [`NetworkError::query`], but a `NotFound` becomes `ObjectNotFound`.
    pub(crate) fn lookup(
        kind: &'static str,
        operation: &'static str,
        id: impl ToString,
    ) -> impl FnOnce(ClientError) -> Self {
        let id = id.to_string();
        move |source| {
            if source.is_not_found() {
                NetworkError::ObjectNotFound { kind, id }
            } else {
                NetworkError::Query {
                    operation,
                    id,
                    source,
                }
            }
        }
    }

    pub(crate) fn client(operation: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| NetworkError::Client { operation, source }
    }

    pub(crate) fn chain(operation: &'static str) -> impl FnOnce(ChainError) -> Self {
        move |source| NetworkError::Chain { operation, source }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            NetworkError::ObjectNotFound { .. } => true,
            NetworkError::Query { source, .. } | NetworkError::Client { source, .. } => {
                source.is_not_found()
            }
            _ => false,
        }
    }
}
