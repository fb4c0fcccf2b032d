use async_trait::async_trait;
use log::{debug, info};
use neo4rs::{query, Graph};

use crate::error::StoreError;
use crate::types::{Transfer, WriteParams};

/// Deletes every node and relationship currently in the store.
const WIPE: &str = "MATCH (n) DETACH DELETE n";

/// Idempotent: a constraint that already exists is left untouched.
const ADDRESS_CONSTRAINT: &str = "\
CREATE CONSTRAINT address_unique IF NOT EXISTS
FOR (a:Address)
REQUIRE a.address IS UNIQUE";

/// Both endpoints are merged before the edge is created, so a `SENT` edge
/// never dangles. The edge itself is always CREATEd: repeated sender/receiver
/// pairs keep one edge per transaction.
const WRITE_TRANSFER: &str = "\
MERGE (from:Address {address: $from})
MERGE (to:Address {address: $to})
CREATE (from)-[:SENT {
    hash: $hash,
    value: $value,
    block: $block,
    timestamp: $timestamp
}]->(to)";

/// Write access to the transaction graph.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Wipes the store and re-asserts the `Address.address` uniqueness
    /// constraint. Running it twice ends in the same state as running it once.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Persists one transfer as a `SENT` edge between its merged endpoints.
    async fn record_transfer(&self, transfer: &Transfer) -> Result<(), StoreError>;
}

/// Neo4j-backed store speaking Bolt through a `neo4rs` connection pool.
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, StoreError> {
        let graph = Graph::new(uri, user, password)
            .await
            .map_err(StoreError::Connect)?;

        Ok(Self { graph })
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        self.graph.run(query(WIPE)).await.map_err(StoreError::Reset)?;
        info!("Graph store wiped (all nodes and relationships deleted)");

        self.graph
            .run(query(ADDRESS_CONSTRAINT))
            .await
            .map_err(StoreError::Reset)?;
        debug!("Address uniqueness constraint asserted");

        Ok(())
    }

    async fn record_transfer(&self, transfer: &Transfer) -> Result<(), StoreError> {
        let params = WriteParams::from(transfer);

        let write = query(WRITE_TRANSFER)
            .param("from", params.from)
            .param("to", params.to)
            .param("hash", params.hash.clone())
            .param("value", params.value)
            .param("block", params.block)
            .param("timestamp", params.timestamp);

        self.graph.run(write).await.map_err(|source| StoreError::Write {
            hash: params.hash,
            source,
        })
    }
}
