use log::{debug, info};

/// Sink for ingestion progress events.
///
/// The pipeline only emits events; how they surface (log lines here, a
/// metrics counter elsewhere) is up to the adapter. The running total passed
/// to `transfer_written` increases by one per committed write.
pub trait ProgressSink: Send + Sync {
    /// The block range is known; nothing has been fetched yet.
    fn run_started(&self, first_block: u64, last_block: u64);

    /// One block was fetched, with this many qualifying transactions.
    fn block_fetched(&self, block: u64, qualifying: usize);

    /// One transfer was committed to the store.
    fn transfer_written(&self, total: u64);

    /// The whole window was processed.
    fn run_completed(&self, total: u64, block_count: u64);
}

/// Default adapter that mirrors progress to the log.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn run_started(&self, first_block: u64, last_block: u64) {
        info!(
            "Fetching transactions from block {} to {}",
            first_block, last_block
        );
    }

    fn block_fetched(&self, block: u64, qualifying: usize) {
        info!("Block {} | Transactions to download: {}", block, qualifying);
    }

    fn transfer_written(&self, total: u64) {
        debug!("Downloaded {} transactions", total);
    }

    fn run_completed(&self, total: u64, block_count: u64) {
        info!(
            "Done. Downloaded {} transactions from {} blocks",
            total, block_count
        );
    }
}
