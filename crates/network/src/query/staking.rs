use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use spn_client::{ClientContext, ClientError, ClientResult};

const VALIDATOR_PATH: &str = "/cosmos.staking.v1beta1.Query/Validator";
const PARAMS_PATH: &str = "/cosmos.staking.v1beta1.Query/Params";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingValidator {
    pub operator_address: String,
    #[serde(default)]
    pub jailed: bool,
    /// e.g. `BOND_STATUS_BONDED`
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tokens: String,
    #[serde(default)]
    pub delegator_shares: String,
    #[serde(default)]
    pub description: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    /// Protobuf JSON duration, e.g. `"1814400s"`
    pub unbonding_time: String,
    #[serde(default)]
    pub max_validators: u32,
    #[serde(default)]
    pub max_entries: u32,
    #[serde(default)]
    pub historical_entries: u32,
    #[serde(default)]
    pub bond_denom: String,
}

impl StakingParams {
    /// Unbonding time in whole seconds; fractional seconds are dropped.
    pub fn unbonding_time_secs(&self) -> ClientResult<u64> {
        let raw = self.unbonding_time.trim();
        let seconds = raw.strip_suffix('s').ok_or_else(|| {
            ClientError::decode(format!("unbonding_time {raw:?}: missing 's' suffix"))
        })?;
        let whole = seconds.split('.').next().unwrap_or_default();
        whole
            .parse()
            .map_err(|e| ClientError::decode(format!("unbonding_time {raw:?}: {e}")))
    }
}

#[async_trait]
pub trait StakingQuery: Send + Sync {
    async fn validator(&self, operator_address: &str) -> ClientResult<StakingValidator>;

    async fn params(&self) -> ClientResult<StakingParams>;
}

/// Staking module query client
#[derive(Debug, Clone)]
pub struct StakingQueryClient {
    ctx: ClientContext,
}

impl StakingQueryClient {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }
}

#[derive(Deserialize)]
struct ValidatorResponse {
    validator: StakingValidator,
}

#[derive(Deserialize)]
struct ParamsResponse {
    params: StakingParams,
}

#[async_trait]
impl StakingQuery for StakingQueryClient {
    async fn validator(&self, operator_address: &str) -> ClientResult<StakingValidator> {
        let response: ValidatorResponse = self
            .ctx
            .query(VALIDATOR_PATH, &json!({ "validator_addr": operator_address }))
            .await?;
        Ok(response.validator)
    }

    async fn params(&self) -> ClientResult<StakingParams> {
        let response: ParamsResponse = self.ctx.query(PARAMS_PATH, &json!({})).await?;
        Ok(response.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(unbonding_time: &str) -> StakingParams {
        StakingParams {
            unbonding_time: unbonding_time.to_string(),
            max_validators: 100,
            max_entries: 7,
            historical_entries: 10_000,
            bond_denom: "stake".to_string(),
        }
    }

    #[test]
    fn parses_protobuf_durations() {
        assert_eq!(params("1814400s").unbonding_time_secs().unwrap(), 1_814_400);
        assert_eq!(params("10.5s").unbonding_time_secs().unwrap(), 10);
        assert!(params("21d").unbonding_time_secs().is_err());
        assert!(params("s").unbonding_time_secs().is_err());
    }
}
