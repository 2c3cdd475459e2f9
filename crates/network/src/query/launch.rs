use super::Coin;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use spn_client::{ClientContext, ClientResult};

const CHAIN_PATH: &str = "/spn.launch.Query/Chain";
const CHAIN_ALL_PATH: &str = "/spn.launch.Query/ChainAll";
const GENESIS_ACCOUNT_ALL_PATH: &str = "/spn.launch.Query/GenesisAccountAll";
const GENESIS_VALIDATOR_ALL_PATH: &str = "/spn.launch.Query/GenesisValidatorAll";
const PARAMS_PATH: &str = "/spn.launch.Query/Params";

/// A chain registered for launch on the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLaunch {
    pub launch_id: u64,
    pub coordinator_id: u64,
    pub genesis_chain_id: String,
    #[serde(default)]
    pub created_at: i64,
    pub source_url: String,
    pub source_hash: String,
    #[serde(default)]
    pub has_campaign: bool,
    #[serde(default)]
    pub campaign_id: u64,
    #[serde(default)]
    pub is_mainnet: bool,
    #[serde(default)]
    pub launch_triggered: bool,
    /// Unix seconds; zero until the launch is triggered
    #[serde(default)]
    pub launch_time: i64,
    #[serde(default)]
    pub consumer_revision_height: i64,
    #[serde(default)]
    pub monitoring_connected: bool,
    #[serde(default)]
    pub metadata: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisAccount {
    pub launch_id: u64,
    pub address: String,
    #[serde(default)]
    pub coins: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub id: String,
    /// `host:port`
    pub connection: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisValidator {
    pub launch_id: u64,
    pub address: String,
    /// Base64 gentx
    pub gen_tx: String,
    pub cons_pub_key: String,
    pub self_delegation: Coin,
    pub peer: Peer,
}

/// Bounds on the delay between triggering a launch and the launch itself, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchTimeRange {
    pub min_launch_time: i64,
    pub max_launch_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchParams {
    pub launch_time_range: LaunchTimeRange,
    #[serde(default)]
    pub revert_delay: i64,
    #[serde(default)]
    pub chain_creation_fee: Vec<Coin>,
    #[serde(default)]
    pub max_metadata_length: u64,
}

#[async_trait]
pub trait LaunchQuery: Send + Sync {
    async fn chain(&self, launch_id: u64) -> ClientResult<ChainLaunch>;

    async fn chain_all(&self) -> ClientResult<Vec<ChainLaunch>>;

    async fn genesis_account_all(&self, launch_id: u64) -> ClientResult<Vec<GenesisAccount>>;

    async fn genesis_validator_all(&self, launch_id: u64) -> ClientResult<Vec<GenesisValidator>>;

    async fn params(&self) -> ClientResult<LaunchParams>;
}

/// Launch module query client
#[derive(Debug, Clone)]
pub struct LaunchQueryClient {
    ctx: ClientContext,
}

impl LaunchQueryClient {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }
}

#[derive(Deserialize)]
struct ChainResponse {
    chain: ChainLaunch,
}

#[derive(Deserialize)]
struct ChainAllResponse {
    #[serde(default)]
    chain: Vec<ChainLaunch>,
}

#[derive(Deserialize)]
struct GenesisAccountAllResponse {
    #[serde(default, alias = "genesisAccount")]
    genesis_account: Vec<GenesisAccount>,
}

#[derive(Deserialize)]
struct GenesisValidatorAllResponse {
    #[serde(default, alias = "genesisValidator")]
    genesis_validator: Vec<GenesisValidator>,
}

#[derive(Deserialize)]
struct ParamsResponse {
    params: LaunchParams,
}

#[async_trait]
impl LaunchQuery for LaunchQueryClient {
    async fn chain(&self, launch_id: u64) -> ClientResult<ChainLaunch> {
        let response: ChainResponse = self
            .ctx
            .query(CHAIN_PATH, &json!({ "launch_id": launch_id }))
            .await?;
        Ok(response.chain)
    }

    async fn chain_all(&self) -> ClientResult<Vec<ChainLaunch>> {
        let response: ChainAllResponse = self.ctx.query(CHAIN_ALL_PATH, &json!({})).await?;
        Ok(response.chain)
    }

    async fn genesis_account_all(&self, launch_id: u64) -> ClientResult<Vec<GenesisAccount>> {
        let response: GenesisAccountAllResponse = self
            .ctx
            .query(GENESIS_ACCOUNT_ALL_PATH, &json!({ "launch_id": launch_id }))
            .await?;
        Ok(response.genesis_account)
    }

    async fn genesis_validator_all(&self, launch_id: u64) -> ClientResult<Vec<GenesisValidator>> {
        let response: GenesisValidatorAllResponse = self
            .ctx
            .query(GENESIS_VALIDATOR_ALL_PATH, &json!({ "launch_id": launch_id }))
            .await?;
        Ok(response.genesis_validator)
    }

    async fn params(&self) -> ClientResult<LaunchParams> {
        let response: ParamsResponse = self.ctx.query(PARAMS_PATH, &json!({})).await?;
        Ok(response.params)
    }
}
