use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

/// One mined value transfer: a transaction that carries a recipient.
///
/// This is the unit the graph store persists — sender and recipient become
/// `Address` nodes, the transfer itself one `SENT` edge between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub hash: TxHash,
    pub value: U256,
    pub block: u64,
    pub timestamp: u64,
}
