use crate::error::{NetworkError, NetworkResult};
use crate::query::{StakingQuery, StakingQueryClient};
use spn_client::{ConsensusInfo, TxClient};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Reward-relevant snapshot of a chain at one height
#[derive(Debug, Clone, PartialEq)]
pub struct RewardsInfo {
    /// Consensus state and validator set at `revision_height`
    pub consensus: ConsensusInfo,
    pub revision_height: u64,
    pub chain_id: String,
    pub unbonding_time_secs: u64,
}

/// Node-level reads against the chain the transaction client is connected to.
///
/// Holds its own staking handle, separate from the façade's.
#[derive(Clone)]
pub struct Node {
    client: Arc<dyn TxClient>,
    staking_query: Arc<dyn StakingQuery>,
}

impl Node {
    pub fn new(client: Arc<dyn TxClient>) -> Self {
        let staking_query = Arc::new(StakingQueryClient::new(client.context().clone()));
        Self {
            client,
            staking_query,
        }
    }

    pub(crate) fn set_staking_query(&mut self, staking_query: Arc<dyn StakingQuery>) {
        self.staking_query = staking_query;
    }

    pub fn staking_query(&self) -> &Arc<dyn StakingQuery> {
        &self.staking_query
    }

    /// Collects consensus state, unbonding time and chain id for reward distribution.
    pub async fn rewards_info(&self, height: u64) -> NetworkResult<RewardsInfo> {
        debug!(height, "fetching rewards info");
        let (consensus, params, status) = futures::try_join!(
            async {
                self.client
                    .consensus_info(height)
                    .await
                    .map_err(NetworkError::lookup("height", "consensus info", height))
            },
            async {
                self.staking_query
                    .params()
                    .await
                    .map_err(NetworkError::client("staking params"))
            },
            async {
                self.client
                    .status()
                    .await
                    .map_err(NetworkError::client("node status"))
            },
        )?;

        let unbonding_time_secs = params
            .unbonding_time_secs()
            .map_err(NetworkError::client("staking params"))?;

        Ok(RewardsInfo {
            consensus,
            revision_height: height,
            chain_id: status.chain_id().to_string(),
            unbonding_time_secs,
        })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("context", self.client.context())
            .finish_non_exhaustive()
    }
}
