use crate::error::{NetworkError, NetworkResult};
use crate::network::Network;
use crate::node::RewardsInfo;
use crate::query::{Campaign, Coin, RewardPool, StakingValidator};
use tracing::debug;

impl Network {
    pub async fn campaign(&self, campaign_id: u64) -> NetworkResult<Campaign> {
        self.campaign_query()
            .campaign(campaign_id)
            .await
            .map_err(NetworkError::lookup("campaign", "campaign query", campaign_id))
    }

    /// Resolves the coordinator id registered for `address`.
    pub async fn coordinator_id_by_address(&self, address: &str) -> NetworkResult<u64> {
        let coordinator = self
            .profile_query()
            .coordinator_by_address(address)
            .await
            .map_err(NetworkError::lookup("coordinator", "profile query", address))?;
        Ok(coordinator.coordinator_id)
    }

    pub async fn balances(&self, address: &str) -> NetworkResult<Vec<Coin>> {
        self.bank_query()
            .all_balances(address)
            .await
            .map_err(NetworkError::query("bank query", address))
    }

    pub async fn reward_pool(&self, launch_id: u64) -> NetworkResult<RewardPool> {
        self.reward_query()
            .reward_pool(launch_id)
            .await
            .map_err(NetworkError::lookup("reward pool", "reward query", launch_id))
    }

    pub async fn staking_validator(&self, operator_address: &str) -> NetworkResult<StakingValidator> {
        self.staking_query()
            .validator(operator_address)
            .await
            .map_err(NetworkError::lookup("validator", "staking query", operator_address))
    }

    /// Light-client ids SPN has verified for the consumer chain of `launch_id`.
    pub async fn verified_client_ids(&self, launch_id: u64) -> NetworkResult<Vec<String>> {
        self.monitoring_consumer_query()
            .verified_client_ids(launch_id)
            .await
            .map_err(NetworkError::query("monitoring consumer query", launch_id))
    }

    /// Client id the provider chain uses to track SPN.
    ///
    /// Needs a monitoring-provider handle pointed at the provider chain.
    pub async fn consumer_client_id(&self) -> NetworkResult<String> {
        let query = self
            .monitoring_provider_query()
            .ok_or(NetworkError::SubsystemUnavailable("monitoring-provider"))?;
        query
            .consumer_client_id()
            .await
            .map_err(NetworkError::client("monitoring provider query"))
    }

    pub async fn rewards_info(&self, height: u64) -> NetworkResult<RewardsInfo> {
        debug!(height, "delegating rewards info to node");
        self.node().rewards_info(height).await
    }
}
