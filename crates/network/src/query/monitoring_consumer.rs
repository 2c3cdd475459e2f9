use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use spn_client::{ClientContext, ClientResult};

const VERIFIED_CLIENT_IDS_PATH: &str = "/spn.monitoringc.Query/VerifiedClientIds";
const PROVIDER_CLIENT_ID_PATH: &str = "/spn.monitoringc.Query/ProviderClientID";

/// IBC client on SPN that tracks the provider chain of a launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderClientId {
    pub launch_id: u64,
    pub client_id: String,
}

/// Monitoring-consumer side: the SPN module receiving monitoring packets
#[async_trait]
pub trait MonitoringConsumerQuery: Send + Sync {
    async fn verified_client_ids(&self, launch_id: u64) -> ClientResult<Vec<String>>;

    async fn provider_client_id(&self, launch_id: u64) -> ClientResult<ProviderClientId>;
}

/// Monitoring-consumer module query client
#[derive(Debug, Clone)]
pub struct MonitoringConsumerQueryClient {
    ctx: ClientContext,
}

impl MonitoringConsumerQueryClient {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }
}

#[derive(Deserialize)]
struct VerifiedClientIdsResponse {
    #[serde(default, alias = "clientIds")]
    client_ids: Vec<String>,
}

#[derive(Deserialize)]
struct ProviderClientIdResponse {
    #[serde(alias = "providerClientID")]
    provider_client_id: ProviderClientId,
}

#[async_trait]
impl MonitoringConsumerQuery for MonitoringConsumerQueryClient {
    async fn verified_client_ids(&self, launch_id: u64) -> ClientResult<Vec<String>> {
        let response: VerifiedClientIdsResponse = self
            .ctx
            .query(VERIFIED_CLIENT_IDS_PATH, &json!({ "launch_id": launch_id }))
            .await?;
        Ok(response.client_ids)
    }

    async fn provider_client_id(&self, launch_id: u64) -> ClientResult<ProviderClientId> {
        let response: ProviderClientIdResponse = self
            .ctx
            .query(PROVIDER_CLIENT_ID_PATH, &json!({ "launch_id": launch_id }))
            .await?;
        Ok(response.provider_client_id)
    }
}
