pub mod block_snapshot;
pub mod transfer;
pub mod write_params;

pub use block_snapshot::{BlockSnapshot, TxRecord};
pub use transfer::Transfer;
pub use write_params::WriteParams;
