//! Launch workflows: triggering a launch on SPN and preparing a local chain for it.

use crate::chain::Chain;
use crate::error::{NetworkError, NetworkResult};
use crate::events::ProgressIndication;
use crate::network::Network;
use crate::query::ChainLaunch;
use serde::{Deserialize, Serialize};
use spn_client::{Msg, TypedMsg};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Schedules the launch of `launch_id` after `remaining_time` seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTriggerLaunch {
    pub coordinator: String,
    pub launch_id: u64,
    pub remaining_time: u64,
}

impl TypedMsg for MsgTriggerLaunch {
    const TYPE_URL: &'static str = "/spn.launch.MsgTriggerLaunch";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTriggerLaunchResponse {}

fn secs(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn launch_time(remaining_secs: u64) -> Option<chrono::DateTime<chrono::Utc>> {
    let remaining = chrono::Duration::try_seconds(i64::try_from(remaining_secs).ok()?)?;
    chrono::Utc::now().checked_add_signed(remaining)
}

impl Network {
    /// Fetches the launch record of `launch_id`.
    pub async fn chain_launch(&self, launch_id: u64) -> NetworkResult<ChainLaunch> {
        self.emit("Fetching chain information", ProgressIndication::Update);
        self.launch_query()
            .chain(launch_id)
            .await
            .map_err(NetworkError::lookup("chain", "launch query", launch_id))
    }

    /// Sets the launch time of `launch_id` to now plus `remaining_time`.
    ///
    /// A zero `remaining_time` means the minimum allowed by the launch module.
    /// Anything outside the module's launch time range is rejected before a
    /// transaction is built.
    pub async fn trigger_launch(
        &self,
        launch_id: u64,
        remaining_time: Duration,
    ) -> NetworkResult<()> {
        self.emit("Setting launch time", ProgressIndication::Start);

        let params = self
            .launch_query()
            .params()
            .await
            .map_err(NetworkError::client("launch params"))?;
        let min_secs = secs(params.launch_time_range.min_launch_time);
        let max_secs = secs(params.launch_time_range.max_launch_time);

        let remaining_secs = match remaining_time.as_secs() {
            0 => min_secs,
            s => s,
        };
        if remaining_secs < min_secs || remaining_secs > max_secs {
            return Err(NetworkError::LaunchTimeOutOfRange {
                remaining_secs,
                min_secs,
                max_secs,
            });
        }

        let coordinator = self
            .account_address()
            .map_err(NetworkError::client("account address"))?;
        let msg = Msg::new(&MsgTriggerLaunch {
            coordinator,
            launch_id,
            remaining_time: remaining_secs,
        })
        .map_err(NetworkError::client("encode trigger launch"))?;

        debug!(launch_id, remaining_secs, "broadcasting trigger launch");
        let res = self
            .client()
            .broadcast_tx(self.account(), vec![msg])
            .await
            .map_err(NetworkError::query("trigger launch", launch_id))?;
        let _: MsgTriggerLaunchResponse = res
            .decode()
            .map_err(NetworkError::query("trigger launch", launch_id))?;

        info!(launch_id, tx_hash = %res.tx_hash, remaining_secs, "launch triggered");
        let message = match launch_time(remaining_secs) {
            Some(at) => format!("Chain {launch_id} will be launched on {at}"),
            None => format!("Chain {launch_id} will be launched in {remaining_secs}s"),
        };
        self.emit(message, ProgressIndication::Finish);
        Ok(())
    }

    /// Readies `chain` to join the triggered launch `launch_id`.
    ///
    /// Returns the path the launch genesis is expected at.
    pub async fn prepare(&self, chain: &dyn Chain, launch_id: u64) -> NetworkResult<PathBuf> {
        self.emit("Preparing blockchain", ProgressIndication::Start);
        let launch = self.chain_launch(launch_id).await?;
        if !launch.launch_triggered {
            return Err(NetworkError::LaunchNotTriggered(launch_id));
        }

        let actual = chain.chain_id().map_err(NetworkError::chain("chain id"))?;
        if actual != launch.genesis_chain_id {
            return Err(NetworkError::ChainIdMismatch {
                launch_id,
                expected: launch.genesis_chain_id,
                actual,
            });
        }

        chain
            .cache_binary(launch_id)
            .map_err(NetworkError::chain("cache binary"))?;
        let genesis_path = chain
            .genesis_path()
            .map_err(NetworkError::chain("genesis path"))?;

        info!(launch_id, chain = chain.name(), "chain prepared for launch");
        self.emit(
            format!("Chain is prepared for launch at {}", genesis_path.display()),
            ProgressIndication::Finish,
        );
        Ok(genesis_path)
    }

    /// Sets up `chain` for a launch that has not been triggered yet.
    pub async fn init_chain(&self, chain: &dyn Chain, launch_id: u64) -> NetworkResult<()> {
        self.emit("Initializing blockchain", ProgressIndication::Start);
        let launch = self.chain_launch(launch_id).await?;
        if launch.launch_triggered {
            return Err(NetworkError::LaunchAlreadyTriggered(launch_id));
        }

        chain
            .cache_binary(launch_id)
            .map_err(NetworkError::chain("cache binary"))?;
        chain
            .reset_genesis_time()
            .map_err(NetworkError::chain("reset genesis time"))?;

        self.emit("Blockchain initialized", ProgressIndication::Finish);
        Ok(())
    }

    /// `node_id@public_address`, the form peers are advertised with.
    pub async fn peer_address(
        &self,
        chain: &dyn Chain,
        public_address: &str,
    ) -> NetworkResult<String> {
        let node_id = chain
            .node_id()
            .await
            .map_err(NetworkError::chain("node id"))?;
        Ok(format!("{node_id}@{public_address}"))
    }
}
