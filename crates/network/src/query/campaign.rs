use super::Coin;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use spn_client::{ClientContext, ClientResult};

const CAMPAIGN_PATH: &str = "/spn.campaign.Query/Campaign";
const CAMPAIGN_ALL_PATH: &str = "/spn.campaign.Query/CampaignAll";
const MAINNET_ACCOUNT_ALL_PATH: &str = "/spn.campaign.Query/MainnetAccountAll";

/// A fundraising campaign attached to a mainnet launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: u64,
    pub campaign_name: String,
    pub coordinator_id: u64,
    #[serde(default)]
    pub mainnet_id: u64,
    #[serde(default)]
    pub mainnet_initialized: bool,
    #[serde(default)]
    pub total_supply: Vec<Coin>,
    #[serde(default)]
    pub allocated_shares: Vec<Coin>,
    #[serde(default)]
    pub metadata: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainnetAccount {
    pub campaign_id: u64,
    pub address: String,
    #[serde(default)]
    pub shares: Vec<Coin>,
}

#[async_trait]
pub trait CampaignQuery: Send + Sync {
    async fn campaign(&self, campaign_id: u64) -> ClientResult<Campaign>;

    async fn campaign_all(&self) -> ClientResult<Vec<Campaign>>;

    async fn mainnet_account_all(&self, campaign_id: u64) -> ClientResult<Vec<MainnetAccount>>;
}

/// Campaign module query client
#[derive(Debug, Clone)]
pub struct CampaignQueryClient {
    ctx: ClientContext,
}

impl CampaignQueryClient {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }
}

#[derive(Deserialize)]
struct CampaignResponse {
    campaign: Campaign,
}

#[derive(Deserialize)]
struct CampaignAllResponse {
    #[serde(default)]
    campaign: Vec<Campaign>,
}

#[derive(Deserialize)]
struct MainnetAccountAllResponse {
    #[serde(default, alias = "mainnetAccount")]
    mainnet_account: Vec<MainnetAccount>,
}

#[async_trait]
impl CampaignQuery for CampaignQueryClient {
    async fn campaign(&self, campaign_id: u64) -> ClientResult<Campaign> {
        let response: CampaignResponse = self
            .ctx
            .query(CAMPAIGN_PATH, &json!({ "campaign_id": campaign_id }))
            .await?;
        Ok(response.campaign)
    }

    async fn campaign_all(&self) -> ClientResult<Vec<Campaign>> {
        let response: CampaignAllResponse = self.ctx.query(CAMPAIGN_ALL_PATH, &json!({})).await?;
        Ok(response.campaign)
    }

    async fn mainnet_account_all(&self, campaign_id: u64) -> ClientResult<Vec<MainnetAccount>> {
        let response: MainnetAccountAllResponse = self
            .ctx
            .query(MAINNET_ACCOUNT_ALL_PATH, &json!({ "campaign_id": campaign_id }))
            .await?;
        Ok(response.mainnet_account)
    }
}
