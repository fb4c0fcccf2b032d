use std::env;

use url::Url;

use crate::error::ConfigError;

/// Runtime configuration, read once at startup from the process environment.
///
/// Every value is required; a missing or malformed one aborts before any
/// connection is opened. `.env` files are honored by `main` via dotenv.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full JSON-RPC endpoint of the Ethereum node.
    pub rpc_url: Url,
    /// Bolt URI of the Neo4j instance.
    pub store_uri: String,
    pub store_user: String,
    pub store_password: String,
    /// Trailing window size: how many blocks before the chain head to ingest.
    pub block_count: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = required(&lookup, "RPC_URL")?;
        let rpc_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidVar {
            var: "RPC_URL",
            value: raw_url,
            reason: e.to_string(),
        })?;

        let store_uri = required(&lookup, "NEO4J_URI")?;
        let store_user = required(&lookup, "NEO4J_USER")?;
        let store_password = required(&lookup, "NEO4J_PASSWORD")?;

        let raw_count = required(&lookup, "BLOCK_COUNT")?;
        let block_count = raw_count.parse::<u64>().map_err(|e| ConfigError::InvalidVar {
            var: "BLOCK_COUNT",
            value: raw_count,
            reason: e.to_string(),
        })?;

        Ok(Self {
            rpc_url,
            store_uri,
            store_user,
            store_password,
            block_count,
        })
    }
}

fn required(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    lookup(var).ok_or(ConfigError::MissingVar(var))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            ("RPC_URL", "https://mainnet.example.org/rpc".to_string()),
            ("NEO4J_URI", "neo4j://localhost:7687".to_string()),
            ("NEO4J_USER", "neo4j".to_string()),
            ("NEO4J_PASSWORD", "secret".to_string()),
            ("BLOCK_COUNT", "10".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|var| env.get(var).cloned())
    }

    #[test]
    fn loads_a_complete_environment() {
        let config = load(&full_env()).unwrap();

        assert_eq!(config.rpc_url.as_str(), "https://mainnet.example.org/rpc");
        assert_eq!(config.store_uri, "neo4j://localhost:7687");
        assert_eq!(config.block_count, 10);
    }

    #[test]
    fn every_variable_is_required() {
        for var in [
            "RPC_URL",
            "NEO4J_URI",
            "NEO4J_USER",
            "NEO4J_PASSWORD",
            "BLOCK_COUNT",
        ] {
            let mut env = full_env();
            env.remove(var);

            assert_eq!(load(&env).unwrap_err(), ConfigError::MissingVar(var));
        }
    }

    #[test]
    fn rejects_an_unparseable_window() {
        let mut env = full_env();
        env.insert("BLOCK_COUNT", "ten".to_string());

        match load(&env).unwrap_err() {
            ConfigError::InvalidVar { var, value, .. } => {
                assert_eq!(var, "BLOCK_COUNT");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_a_negative_window() {
        let mut env = full_env();
        env.insert("BLOCK_COUNT", "-3".to_string());

        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::InvalidVar { var: "BLOCK_COUNT", .. }
        ));
    }

    #[test]
    fn rejects_a_malformed_endpoint() {
        let mut env = full_env();
        env.insert("RPC_URL", "not a url".to_string());

        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::InvalidVar { var: "RPC_URL", .. }
        ));
    }
}
