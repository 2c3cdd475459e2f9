//! Read-only query handles, one per remote subsystem.
//!
//! Every subsystem has a trait (the capability the façade holds) and a
//! default `*QueryClient` that binds the trait to a [`ClientContext`]. Binding
//! performs no I/O; the first method call is what reaches the node.
//!
//! [`ClientContext`]: spn_client::ClientContext

mod bank;
mod campaign;
mod launch;
mod monitoring_consumer;
mod monitoring_provider;
mod profile;
mod reward;
mod staking;

pub use bank::{BankQuery, BankQueryClient};
pub use campaign::{Campaign, CampaignQuery, CampaignQueryClient, MainnetAccount};
pub use launch::{
    ChainLaunch, GenesisAccount, GenesisValidator, LaunchParams, LaunchQuery, LaunchQueryClient,
    LaunchTimeRange, Peer,
};
pub use monitoring_consumer::{
    MonitoringConsumerQuery, MonitoringConsumerQueryClient, ProviderClientId,
};
pub use monitoring_provider::{
    MonitoringInfo, MonitoringProviderQuery, MonitoringProviderQueryClient, SignatureCount,
    SignatureCounts,
};
pub use profile::{
    Coordinator, CoordinatorDescription, ProfileQuery, ProfileQueryClient, ProfileValidator,
    ValidatorDescription,
};
pub use reward::{RewardParams, RewardPool, RewardQuery, RewardQueryClient};
pub use staking::{StakingParams, StakingQuery, StakingQueryClient, StakingValidator};

use serde::{Deserialize, Serialize};

/// A token amount. `amount` stays a string, balances overflow `u64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
