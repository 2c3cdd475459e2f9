//! SPN Launch Network
//!
//! A single [`Network`] façade over the transaction client, the signing
//! account and one typed query handle per SPN module (campaign, launch,
//! profile, reward, staking, bank, monitoring). Handles default to clients
//! bound to the transaction client's query context and can be swapped at
//! construction through [`NetworkOption`]s, which is how tests inject fakes.
//!
//! ```ignore
//! use spn_network::{collect_events, EventBus, Network};
//!
//! let (bus, mut events) = EventBus::new();
//! let network = Network::new(client, account, [collect_events(Arc::new(bus))]);
//! network.trigger_launch(launch_id, Duration::from_secs(3600)).await?;
//! ```

pub mod chain;
pub mod events;
pub mod query;

mod error;
mod id;
mod launch;
mod lookup;
mod network;
mod node;

pub use chain::{Chain, ChainError, ChainResult};
pub use error::{NetworkError, NetworkResult, ParseIdError};
pub use events::{Event, EventBus, EventSink, NoopSink, ProgressIndication};
pub use id::parse_id;
pub use launch::{MsgTriggerLaunch, MsgTriggerLaunchResponse};
pub use network::{
    collect_events, with_bank_query, with_campaign_query, with_launch_query,
    with_monitoring_consumer_query, with_monitoring_provider_query, with_node_staking_query,
    with_profile_query, with_reward_query, with_staking_query, Network, NetworkBuilder,
    NetworkOption,
};
pub use node::{Node, RewardsInfo};
