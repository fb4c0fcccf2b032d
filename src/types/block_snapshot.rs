use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

use super::transfer::Transfer;

/// A single transaction as returned by the RPC node, narrowed to the fields
/// ingestion needs. `to` is absent for contract creations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxRecord {
    pub hash: TxHash,
    pub from: Address,
    pub to: Option<Address>,
    pub value: U256,
}

/// One fetched block with its resolved transaction bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub number: u64,
    pub timestamp: u64,
    pub transactions: Vec<TxRecord>,
}

impl BlockSnapshot {
    /// Transactions that carry a recipient, in RPC order, stamped with this
    /// block's number and timestamp. Contract creations are skipped.
    pub fn transfers(&self) -> Vec<Transfer> {
        self.transactions
            .iter()
            .filter_map(|tx| {
                tx.to.map(|to| Transfer {
                    from: tx.from,
                    to,
                    hash: tx.hash,
                    value: tx.value,
                    block: self.number,
                    timestamp: self.timestamp,
                })
            })
            .collect()
    }
}
