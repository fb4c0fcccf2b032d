use log::warn;

use crate::error::IngestError;
use crate::modules::chain_client::ChainClient;
use crate::modules::graph_store::GraphStore;
use crate::modules::progress::ProgressSink;

/// Drives one end-to-end ingestion run: reset the store, compute the trailing
/// block window, then write one `SENT` edge per qualifying transaction.
///
/// The run is strictly sequential — blocks ascend one at a time and every
/// write completes before the next begins — and runs exactly once per
/// process. Any failure aborts the run; whatever was committed before the
/// failure stays in the store.
pub struct Ingester<C, S> {
    chain: C,
    store: S,
    progress: Box<dyn ProgressSink>,
    window: u64,
}

impl<C: ChainClient, S: GraphStore> Ingester<C, S> {
    pub fn new(chain: C, store: S, progress: Box<dyn ProgressSink>, window: u64) -> Self {
        Self {
            chain,
            store,
            progress,
            window,
        }
    }

    /// Runs the pipeline once and returns the number of transfers written.
    pub async fn run(&self) -> Result<u64, IngestError> {
        self.store.initialize().await?;

        let latest = self.chain.current_height().await?;
        let (first, last) = block_range(latest, self.window);
        self.progress.run_started(first, last);

        let mut total = 0u64;
        for number in first..=last {
            let block = self.chain.fetch_block(number).await?;
            let transfers = block.transfers();
            self.progress.block_fetched(number, transfers.len());

            for transfer in &transfers {
                self.store.record_transfer(transfer).await?;
                total += 1;
                self.progress.transfer_written(total);
            }
        }

        self.progress.run_completed(total, self.window);
        Ok(total)
    }
}

/// Inclusive trailing window ending at the chain head: `window + 1` blocks.
///
/// A window larger than the chain itself clamps to genesis instead of
/// underflowing into an invalid block number.
pub fn block_range(latest: u64, window: u64) -> (u64, u64) {
    let first = match latest.checked_sub(window) {
        Some(first) => first,
        None => {
            warn!(
                "Window of {} blocks exceeds chain height {}, clamping to genesis",
                window, latest
            );
            0
        }
    };

    (first, latest)
}
