use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use spn_client::{ClientContext, ClientResult};

const CONSUMER_CLIENT_ID_PATH: &str = "/spn.monitoringp.Query/ConsumerClientID";
const CONNECTION_CHANNEL_ID_PATH: &str = "/spn.monitoringp.Query/ConnectionChannelID";
const MONITORING_INFO_PATH: &str = "/spn.monitoringp.Query/MonitoringInfo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureCount {
    pub op_address: String,
    /// Decimal string
    pub relative_signatures: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureCounts {
    #[serde(default)]
    pub block_count: u64,
    #[serde(default)]
    pub counts: Vec<SignatureCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringInfo {
    #[serde(default)]
    pub transmitted: bool,
    #[serde(default)]
    pub signature_counts: SignatureCounts,
}

/// Monitoring-provider side: the module running on a launched chain.
///
/// It lives on the provider chain rather than on SPN, so the façade has no
/// default handle for it.
#[async_trait]
pub trait MonitoringProviderQuery: Send + Sync {
    async fn consumer_client_id(&self) -> ClientResult<String>;

    async fn connection_channel_id(&self) -> ClientResult<String>;

    async fn monitoring_info(&self) -> ClientResult<MonitoringInfo>;
}

/// Monitoring-provider module query client; bind it to a provider chain context
#[derive(Debug, Clone)]
pub struct MonitoringProviderQueryClient {
    ctx: ClientContext,
}

impl MonitoringProviderQueryClient {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }
}

#[derive(Deserialize)]
struct ClientIdValue {
    #[serde(alias = "clientID")]
    client_id: String,
}

#[derive(Deserialize)]
struct ConsumerClientIdResponse {
    #[serde(alias = "consumerClientID")]
    consumer_client_id: ClientIdValue,
}

#[derive(Deserialize)]
struct ChannelIdValue {
    #[serde(alias = "channelID")]
    channel_id: String,
}

#[derive(Deserialize)]
struct ConnectionChannelIdResponse {
    #[serde(alias = "connectionChannelID")]
    connection_channel_id: ChannelIdValue,
}

#[derive(Deserialize)]
struct MonitoringInfoResponse {
    #[serde(default, alias = "monitoringInfo")]
    monitoring_info: MonitoringInfo,
}

#[async_trait]
impl MonitoringProviderQuery for MonitoringProviderQueryClient {
    async fn consumer_client_id(&self) -> ClientResult<String> {
        let response: ConsumerClientIdResponse =
            self.ctx.query(CONSUMER_CLIENT_ID_PATH, &json!({})).await?;
        Ok(response.consumer_client_id.client_id)
    }

    async fn connection_channel_id(&self) -> ClientResult<String> {
        let response: ConnectionChannelIdResponse =
            self.ctx.query(CONNECTION_CHANNEL_ID_PATH, &json!({})).await?;
        Ok(response.connection_channel_id.channel_id)
    }

    async fn monitoring_info(&self) -> ClientResult<MonitoringInfo> {
        let response: MonitoringInfoResponse =
            self.ctx.query(MONITORING_INFO_PATH, &json!({})).await?;
        Ok(response.monitoring_info)
    }
}
