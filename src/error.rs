use thiserror::Error;

/// Top-level failure for an ingestion run, split by the collaborator that
/// caused it so `main` can report the dependency and pick the exit code.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Chain(#[from] ChainError),

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IngestError {
    /// Process exit code for this failure. Success is 0; each dependency
    /// gets its own non-zero code so callers can tell them apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            IngestError::Config(_) => 2,
            IngestError::Chain(_) => 3,
            IngestError::Store(_) => 4,
        }
    }

    /// Which external dependency failed, for the final error report.
    pub fn dependency(&self) -> &'static str {
        match self {
            IngestError::Config(_) => "configuration",
            IngestError::Chain(_) => "blockchain client",
            IngestError::Store(_) => "graph store",
        }
    }
}

/// A required configuration value is missing or malformed. Raised before any
/// connection is opened or any store mutation happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// The JSON-RPC provider is unreachable or a chain query failed.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Failed to connect to RPC endpoint: {0}")]
    Connect(#[source] alloy::transports::TransportError),

    #[error("Failed to query chain height: {0}")]
    Height(#[source] alloy::transports::TransportError),

    #[error("Failed to fetch block {number}: {source}")]
    BlockFetch {
        number: u64,
        #[source]
        source: alloy::transports::TransportError,
    },

    #[error("Block {0} not returned by the RPC node")]
    MissingBlock(u64),
}

/// The graph store is unreachable, rejected auth, or a statement failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to connect to graph store: {0}")]
    Connect(#[source] neo4rs::Error),

    #[error("Failed to reset graph store: {0}")]
    Reset(#[source] neo4rs::Error),

    #[error("Graph write failed for transaction {hash}: {source}")]
    Write {
        hash: String,
        #[source]
        source: neo4rs::Error,
    },
}
