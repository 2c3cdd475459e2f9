use crate::events::{Event, EventSink, NoopSink, ProgressIndication};
use crate::node::Node;
use crate::query::{
    BankQuery, BankQueryClient, CampaignQuery, CampaignQueryClient, LaunchQuery,
    LaunchQueryClient, MonitoringConsumerQuery, MonitoringConsumerQueryClient,
    MonitoringProviderQuery, ProfileQuery, ProfileQueryClient, RewardQuery, RewardQueryClient,
    StakingQuery, StakingQueryClient,
};
use spn_client::{Account, TxClient};
use std::fmt;
use std::sync::Arc;

/// Launch-network façade.
///
/// Bundles the transaction client, the signing account, the node sub-object,
/// an event sink and one query handle per remote subsystem. Built once with
/// [`Network::new`] (or [`NetworkBuilder`]) and read-only afterwards; clones
/// share every handle.
#[derive(Clone)]
pub struct Network {
    node: Node,
    ev: Arc<dyn EventSink>,
    client: Arc<dyn TxClient>,
    account: Account,
    campaign_query: Arc<dyn CampaignQuery>,
    launch_query: Arc<dyn LaunchQuery>,
    profile_query: Arc<dyn ProfileQuery>,
    reward_query: Arc<dyn RewardQuery>,
    staking_query: Arc<dyn StakingQuery>,
    bank_query: Arc<dyn BankQuery>,
    monitoring_consumer_query: Arc<dyn MonitoringConsumerQuery>,
    monitoring_provider_query: Option<Arc<dyn MonitoringProviderQuery>>,
}

/// A named override applied while the façade is being built.
pub struct NetworkOption(Box<dyn FnOnce(&mut Network) + Send>);

impl NetworkOption {
    fn new(apply: impl FnOnce(&mut Network) + Send + 'static) -> Self {
        Self(Box::new(apply))
    }

    fn apply(self, network: &mut Network) {
        (self.0)(network)
    }
}

impl fmt::Debug for NetworkOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NetworkOption")
    }
}

pub fn with_campaign_query(client: Arc<dyn CampaignQuery>) -> NetworkOption {
    NetworkOption::new(move |n| n.campaign_query = client)
}

pub fn with_launch_query(client: Arc<dyn LaunchQuery>) -> NetworkOption {
    NetworkOption::new(move |n| n.launch_query = client)
}

pub fn with_profile_query(client: Arc<dyn ProfileQuery>) -> NetworkOption {
    NetworkOption::new(move |n| n.profile_query = client)
}

pub fn with_reward_query(client: Arc<dyn RewardQuery>) -> NetworkOption {
    NetworkOption::new(move |n| n.reward_query = client)
}

/// Overrides the façade's own staking handle.
pub fn with_staking_query(client: Arc<dyn StakingQuery>) -> NetworkOption {
    NetworkOption::new(move |n| n.staking_query = client)
}

/// Overrides the staking handle nested in [`Node`].
pub fn with_node_staking_query(client: Arc<dyn StakingQuery>) -> NetworkOption {
    NetworkOption::new(move |n| n.node.set_staking_query(client))
}

pub fn with_bank_query(client: Arc<dyn BankQuery>) -> NetworkOption {
    NetworkOption::new(move |n| n.bank_query = client)
}

pub fn with_monitoring_consumer_query(client: Arc<dyn MonitoringConsumerQuery>) -> NetworkOption {
    NetworkOption::new(move |n| n.monitoring_consumer_query = client)
}

pub fn with_monitoring_provider_query(client: Arc<dyn MonitoringProviderQuery>) -> NetworkOption {
    NetworkOption::new(move |n| n.monitoring_provider_query = Some(client))
}

/// Routes progress events to `ev`.
pub fn collect_events(ev: Arc<dyn EventSink>) -> NetworkOption {
    NetworkOption::new(move |n| n.ev = ev)
}

impl Network {
    /// Builds the façade.
    ///
    /// Every handle except monitoring-provider defaults to a query client bound
    /// to `client.context()`; binding does no I/O. Options run in order, so the
    /// last one touching a field wins.
    pub fn new(
        client: Arc<dyn TxClient>,
        account: Account,
        options: impl IntoIterator<Item = NetworkOption>,
    ) -> Self {
        let ctx = client.context().clone();
        let mut network = Self {
            node: Node::new(client.clone()),
            ev: Arc::new(NoopSink),
            client,
            account,
            campaign_query: Arc::new(CampaignQueryClient::new(ctx.clone())),
            launch_query: Arc::new(LaunchQueryClient::new(ctx.clone())),
            profile_query: Arc::new(ProfileQueryClient::new(ctx.clone())),
            reward_query: Arc::new(RewardQueryClient::new(ctx.clone())),
            staking_query: Arc::new(StakingQueryClient::new(ctx.clone())),
            bank_query: Arc::new(BankQueryClient::new(ctx.clone())),
            monitoring_consumer_query: Arc::new(MonitoringConsumerQueryClient::new(ctx)),
            monitoring_provider_query: None,
        };
        for option in options {
            option.apply(&mut network);
        }
        network
    }

    pub fn builder(client: Arc<dyn TxClient>, account: Account) -> NetworkBuilder {
        NetworkBuilder::new(client, account)
    }

    pub fn client(&self) -> &Arc<dyn TxClient> {
        &self.client
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn events(&self) -> &Arc<dyn EventSink> {
        &self.ev
    }

    pub fn campaign_query(&self) -> &Arc<dyn CampaignQuery> {
        &self.campaign_query
    }

    pub fn launch_query(&self) -> &Arc<dyn LaunchQuery> {
        &self.launch_query
    }

    pub fn profile_query(&self) -> &Arc<dyn ProfileQuery> {
        &self.profile_query
    }

    pub fn reward_query(&self) -> &Arc<dyn RewardQuery> {
        &self.reward_query
    }

    pub fn staking_query(&self) -> &Arc<dyn StakingQuery> {
        &self.staking_query
    }

    pub fn bank_query(&self) -> &Arc<dyn BankQuery> {
        &self.bank_query
    }

    pub fn monitoring_consumer_query(&self) -> &Arc<dyn MonitoringConsumerQuery> {
        &self.monitoring_consumer_query
    }

    /// `None` unless set with [`with_monitoring_provider_query`].
    pub fn monitoring_provider_query(&self) -> Option<&Arc<dyn MonitoringProviderQuery>> {
        self.monitoring_provider_query.as_ref()
    }

    /// SPN address of the façade's account.
    pub fn account_address(&self) -> spn_client::ClientResult<String> {
        self.account.address(self.client.context().address_prefix())
    }

    pub(crate) fn emit(&self, message: impl Into<String>, progress: ProgressIndication) {
        self.ev.send(Event::new(message, progress));
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("context", self.client.context())
            .field("account", &self.account)
            .field(
                "monitoring_provider_query",
                &self.monitoring_provider_query.is_some(),
            )
            .finish_non_exhaustive()
    }
}

/// Chained alternative to passing a list of [`NetworkOption`]s.
///
/// ```ignore
/// let network = Network::builder(client, account)
///     .campaign_query(fake_campaigns)
///     .events(Arc::new(bus))
///     .build();
/// ```
pub struct NetworkBuilder {
    client: Arc<dyn TxClient>,
    account: Account,
    options: Vec<NetworkOption>,
}

impl NetworkBuilder {
    pub fn new(client: Arc<dyn TxClient>, account: Account) -> Self {
        Self {
            client,
            account,
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: NetworkOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn campaign_query(self, client: Arc<dyn CampaignQuery>) -> Self {
        self.option(with_campaign_query(client))
    }

    pub fn launch_query(self, client: Arc<dyn LaunchQuery>) -> Self {
        self.option(with_launch_query(client))
    }

    pub fn profile_query(self, client: Arc<dyn ProfileQuery>) -> Self {
        self.option(with_profile_query(client))
    }

    pub fn reward_query(self, client: Arc<dyn RewardQuery>) -> Self {
        self.option(with_reward_query(client))
    }

    pub fn staking_query(self, client: Arc<dyn StakingQuery>) -> Self {
        self.option(with_staking_query(client))
    }

    pub fn node_staking_query(self, client: Arc<dyn StakingQuery>) -> Self {
        self.option(with_node_staking_query(client))
    }

    pub fn bank_query(self, client: Arc<dyn BankQuery>) -> Self {
        self.option(with_bank_query(client))
    }

    pub fn monitoring_consumer_query(self, client: Arc<dyn MonitoringConsumerQuery>) -> Self {
        self.option(with_monitoring_consumer_query(client))
    }

    pub fn monitoring_provider_query(self, client: Arc<dyn MonitoringProviderQuery>) -> Self {
        self.option(with_monitoring_provider_query(client))
    }

    pub fn events(self, ev: Arc<dyn EventSink>) -> Self {
        self.option(collect_events(ev))
    }

    pub fn build(self) -> Network {
        Network::new(self.client, self.account, self.options)
    }
}
