use super::Coin;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use spn_client::{ClientContext, ClientResult};

const REWARD_POOL_PATH: &str = "/spn.reward.Query/RewardPool";
const PARAMS_PATH: &str = "/spn.reward.Query/Params";

/// Validator rewards escrowed for a launched chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardPool {
    pub launch_id: u64,
    pub provider: String,
    #[serde(default)]
    pub initial_coins: Vec<Coin>,
    #[serde(default)]
    pub remaining_coins: Vec<Coin>,
    #[serde(default)]
    pub last_reward_height: i64,
    #[serde(default)]
    pub current_reward_height: i64,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardParams {
    #[serde(default)]
    pub min_validator_last_reward_height: i64,
    #[serde(default)]
    pub max_last_reward_height_delta: i64,
}

#[async_trait]
pub trait RewardQuery: Send + Sync {
    async fn reward_pool(&self, launch_id: u64) -> ClientResult<RewardPool>;

    async fn params(&self) -> ClientResult<RewardParams>;
}

/// Reward module query client
#[derive(Debug, Clone)]
pub struct RewardQueryClient {
    ctx: ClientContext,
}

impl RewardQueryClient {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }
}

#[derive(Deserialize)]
struct RewardPoolResponse {
    #[serde(alias = "rewardPool")]
    reward_pool: RewardPool,
}

#[derive(Deserialize)]
struct ParamsResponse {
    params: RewardParams,
}

#[async_trait]
impl RewardQuery for RewardQueryClient {
    async fn reward_pool(&self, launch_id: u64) -> ClientResult<RewardPool> {
        let response: RewardPoolResponse = self
            .ctx
            .query(REWARD_POOL_PATH, &json!({ "launch_id": launch_id }))
            .await?;
        Ok(response.reward_pool)
    }

    async fn params(&self) -> ClientResult<RewardParams> {
        let response: ParamsResponse = self.ctx.query(PARAMS_PATH, &json!({})).await?;
        Ok(response.params)
    }
}
