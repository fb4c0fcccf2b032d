use alloy::providers::{Provider, RootProvider};
use alloy::rpc::types::BlockTransactionsKind;
use alloy::transports::http::{Client, Http};
use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::error::ChainError;
use crate::types::{BlockSnapshot, TxRecord};

/// Read access to the chain, narrowed to the two calls ingestion needs.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Latest confirmed block number.
    async fn current_height(&self) -> Result<u64, ChainError>;

    /// Fetches one block with resolved transaction bodies.
    async fn fetch_block(&self, number: u64) -> Result<BlockSnapshot, ChainError>;
}

/// JSON-RPC client over HTTP.
pub struct RpcChainClient {
    provider: RootProvider<Http<Client>>,
}

impl RpcChainClient {
    /// Connects to the endpoint and probes it once, so a dead node surfaces
    /// here and never reaches the store-wipe step.
    pub async fn connect(rpc_url: Url) -> Result<Self, ChainError> {
        let provider = RootProvider::new_http(rpc_url);
        let chain_id = provider.get_chain_id().await.map_err(ChainError::Connect)?;
        debug!("Connected to RPC endpoint, chain id {}", chain_id);

        Ok(Self { provider })
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn current_height(&self) -> Result<u64, ChainError> {
        self.provider
            .get_block_number()
            .await
            .map_err(ChainError::Height)
    }

    async fn fetch_block(&self, number: u64) -> Result<BlockSnapshot, ChainError> {
        let block = self
            .provider
            .get_block(number.into(), BlockTransactionsKind::Full)
            .await
            .map_err(|source| ChainError::BlockFetch { number, source })?
            .ok_or(ChainError::MissingBlock(number))?;

        let transactions = block
            .transactions
            .txns()
            .map(|tx| TxRecord {
                hash: tx.hash,
                from: tx.from,
                to: tx.to,
                value: tx.value,
            })
            .collect();

        Ok(BlockSnapshot {
            number: block.header.number,
            timestamp: block.header.timestamp,
            transactions,
        })
    }
}
