use super::Coin;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use spn_client::{ClientContext, ClientResult};

const BALANCE_PATH: &str = "/cosmos.bank.v1beta1.Query/Balance";
const ALL_BALANCES_PATH: &str = "/cosmos.bank.v1beta1.Query/AllBalances";

#[async_trait]
pub trait BankQuery: Send + Sync {
    async fn balance(&self, address: &str, denom: &str) -> ClientResult<Coin>;

    async fn all_balances(&self, address: &str) -> ClientResult<Vec<Coin>>;
}

/// Bank module query client
#[derive(Debug, Clone)]
pub struct BankQueryClient {
    ctx: ClientContext,
}

impl BankQueryClient {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }
}

#[derive(Deserialize)]
struct BalanceResponse {
    balance: Option<Coin>,
}

#[derive(Deserialize)]
struct AllBalancesResponse {
    #[serde(default)]
    balances: Vec<Coin>,
}

#[async_trait]
impl BankQuery for BankQueryClient {
    async fn balance(&self, address: &str, denom: &str) -> ClientResult<Coin> {
        let response: BalanceResponse = self
            .ctx
            .query(BALANCE_PATH, &json!({ "address": address, "denom": denom }))
            .await?;
        // The bank module omits zero balances
        Ok(response.balance.unwrap_or_else(|| Coin::new("0", denom)))
    }

    async fn all_balances(&self, address: &str) -> ClientResult<Vec<Coin>> {
        let response: AllBalancesResponse = self
            .ctx
            .query(ALL_BALANCES_PATH, &json!({ "address": address }))
            .await?;
        Ok(response.balances)
    }
}
