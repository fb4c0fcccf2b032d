pub mod error;
pub mod modules;
pub mod types;

use std::process::ExitCode;

use dotenv::dotenv;
use log::{error, info};

use error::IngestError;
use modules::chain_client::RpcChainClient;
use modules::config::Config;
use modules::graph_store::Neo4jStore;
use modules::ingester::Ingester;
use modules::progress::LogProgress;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Ingestion aborted, {} failed: {}", e.dependency(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// One ingestion run. Both external handles live inside this scope, so they
/// are released on every exit path before the process reports its status.
async fn run() -> Result<u64, IngestError> {
    let config = Config::from_env()?;

    // The RPC probe comes first: a dead chain connection must abort the run
    // before the store wipe does any damage.
    info!("Connecting to RPC provider: {}", config.rpc_url);
    let chain = RpcChainClient::connect(config.rpc_url.clone()).await?;

    info!("Connecting to graph store: {}", config.store_uri);
    let store = Neo4jStore::connect(
        &config.store_uri,
        &config.store_user,
        &config.store_password,
    )
    .await?;

    let ingester = Ingester::new(chain, store, Box::new(LogProgress), config.block_count);
    ingester.run().await
}
