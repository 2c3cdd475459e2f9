use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use spn_client::{ClientContext, ClientResult};

const COORDINATOR_PATH: &str = "/spn.profile.Query/Coordinator";
const COORDINATOR_BY_ADDRESS_PATH: &str = "/spn.profile.Query/GetCoordinatorByAddress";
const VALIDATOR_PATH: &str = "/spn.profile.Query/Validator";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorDescription {
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinator {
    pub coordinator_id: u64,
    pub address: String,
    #[serde(default)]
    pub description: CoordinatorDescription,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorDescription {
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub moniker: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub security_contact: String,
    #[serde(default)]
    pub details: String,
}

/// Validator profile, linking an SPN account to its operator addresses on launched chains
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileValidator {
    pub address: String,
    #[serde(default)]
    pub operator_addresses: Vec<String>,
    #[serde(default)]
    pub description: ValidatorDescription,
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn coordinator(&self, coordinator_id: u64) -> ClientResult<Coordinator>;

    /// Resolves the coordinator registered for `address`
    async fn coordinator_by_address(&self, address: &str) -> ClientResult<Coordinator>;

    async fn validator(&self, address: &str) -> ClientResult<ProfileValidator>;
}

/// Profile module query client
#[derive(Debug, Clone)]
pub struct ProfileQueryClient {
    ctx: ClientContext,
}

impl ProfileQueryClient {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }
}

#[derive(Deserialize)]
struct CoordinatorResponse {
    coordinator: Coordinator,
}

#[derive(Deserialize)]
struct ValidatorResponse {
    validator: ProfileValidator,
}

#[async_trait]
impl ProfileQuery for ProfileQueryClient {
    async fn coordinator(&self, coordinator_id: u64) -> ClientResult<Coordinator> {
        let response: CoordinatorResponse = self
            .ctx
            .query(COORDINATOR_PATH, &json!({ "coordinator_id": coordinator_id }))
            .await?;
        Ok(response.coordinator)
    }

    async fn coordinator_by_address(&self, address: &str) -> ClientResult<Coordinator> {
        let response: CoordinatorResponse = self
            .ctx
            .query(COORDINATOR_BY_ADDRESS_PATH, &json!({ "address": address }))
            .await?;
        Ok(response.coordinator)
    }

    async fn validator(&self, address: &str) -> ClientResult<ProfileValidator> {
        let response: ValidatorResponse = self
            .ctx
            .query(VALIDATOR_PATH, &json!({ "address": address }))
            .await?;
        Ok(response.validator)
    }
}
