//! Local chain instance operations consumed by launch workflows.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub type ChainResult<T> = Result<T, ChainError>;

#[derive(Debug, Error)]
pub enum ChainError {
    /// A path accessor was called before the home directory was set up
    #[error("{0} path is not configured")]
    PathNotConfigured(&'static str),
    /// The local node could not be reached
    #[error("node unreachable: {0}")]
    Unreachable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

/// A chain instance being prepared for, or taking part in, a launch.
///
/// Path accessors are pure lookups; only `node_id`, `cache_binary` and
/// `reset_genesis_time` touch the outside world.
#[async_trait]
pub trait Chain: Send + Sync {
    /// Identifier of the chain source (repository and revision)
    fn id(&self) -> ChainResult<String>;
    fn chain_id(&self) -> ChainResult<String>;
    fn name(&self) -> &str;
    fn source_url(&self) -> &str;
    fn source_hash(&self) -> &str;

    fn genesis_path(&self) -> ChainResult<PathBuf>;
    fn gentxs_path(&self) -> ChainResult<PathBuf>;
    fn default_gentx_path(&self) -> ChainResult<PathBuf>;
    fn app_toml_path(&self) -> ChainResult<PathBuf>;
    fn config_toml_path(&self) -> ChainResult<PathBuf>;

    /// P2P node id; may query the running node.
    async fn node_id(&self) -> ChainResult<String>;

    /// Stores the built binary so it can be reused for `launch_id`.
    fn cache_binary(&self, launch_id: u64) -> ChainResult<()>;

    fn reset_genesis_time(&self) -> ChainResult<()>;
}
