use std::str::FromStr;

use alloy::primitives::Address;
use clap::Parser;

use crate::contracts::{AAVE_V3_POOL, AAVE_V3_POOL_DATA_PROVIDER};

#[derive(Parser, Debug)]
#[command(version, about = "Aave V3 Positions GraphQL API")]
pub struct Args {
    /// Ethereum network name used to build the Infura endpoint
    #[arg(long, env = "ETHEREUM_NETWORK", default_value = "mainnet")]
    pub ethereum_network: String,

    /// Infura access key (required unless --rpc-url is given)
    #[arg(long, env = "INFURA_API_KEY")]
    pub infura_api_key: Option<String>,

    /// Explicit JSON-RPC endpoint, overrides the Infura URL
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// HTTP port for the API
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path the GraphQL endpoint is mounted on
    #[arg(long, env = "GRAPHQL_PATH", default_value = "/graphql")]
    pub graphql_path: String,

    /// Aave V3 Pool contract
    #[arg(long, env = "AAVE_POOL_ADDRESS")]
    pub pool_address: Option<String>,

    /// Aave V3 PoolDataProvider contract
    #[arg(long, env = "AAVE_DATA_PROVIDER_ADDRESS")]
    pub data_provider_address: Option<String>,

    /// Upper bound on reserves read in parallel for a single query
    #[arg(long, env = "MAX_CONCURRENT_RESERVES", default_value_t = 8)]
    pub max_concurrent_reserves: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub ethereum_network: String,
    pub infura_api_key: Option<String>,
    pub rpc_url: Option<String>,
    pub port: u16,
    pub graphql_path: String,
    pub pool_address: String,
    pub data_provider_address: String,
    pub max_concurrent_reserves: usize,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let pool_address = args
            .pool_address
            .unwrap_or_else(|| AAVE_V3_POOL.to_string());
        let data_provider_address = args
            .data_provider_address
            .unwrap_or_else(|| AAVE_V3_POOL_DATA_PROVIDER.to_string());

        Self {
            ethereum_network: args.ethereum_network,
            infura_api_key: args.infura_api_key.filter(|key| !key.is_empty()),
            rpc_url: args.rpc_url.filter(|url| !url.is_empty()),
            port: args.port,
            graphql_path: args.graphql_path,
            pool_address,
            data_provider_address,
            max_concurrent_reserves: args.max_concurrent_reserves,
        }
    }

    /// Node endpoint: the explicit RPC URL if set, otherwise the Infura URL
    /// for the configured network.
    pub fn rpc_url(&self) -> Result<String, String> {
        if let Some(ref url) = self.rpc_url {
            return Ok(url.clone());
        }

        let key = self
            .infura_api_key
            .as_ref()
            .ok_or_else(|| "INFURA_API_KEY or RPC_URL is required".to_string())?;

        Ok(format!(
            "https://{}.infura.io/v3/{}",
            self.ethereum_network, key
        ))
    }

    pub fn pool(&self) -> Result<Address, String> {
        Address::from_str(&self.pool_address)
            .map_err(|e| format!("Invalid AAVE_POOL_ADDRESS {}: {}", self.pool_address, e))
    }

    pub fn data_provider(&self) -> Result<Address, String> {
        Address::from_str(&self.data_provider_address).map_err(|e| {
            format!(
                "Invalid AAVE_DATA_PROVIDER_ADDRESS {}: {}",
                self.data_provider_address, e
            )
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        self.rpc_url()?;
        self.pool()?;
        self.data_provider()?;

        if !self.graphql_path.starts_with('/') || self.graphql_path == "/" {
            return Err(format!(
                "GRAPHQL_PATH must be a non-root path starting with '/', got {:?}",
                self.graphql_path
            ));
        }

        if self.graphql_path == "/health" {
            return Err("GRAPHQL_PATH must not shadow the /health endpoint".to_string());
        }

        if self.graphql_path.contains([':', '*', '{', '}']) {
            return Err(format!(
                "GRAPHQL_PATH must be a literal path without ':', '*', '{{' or '}}', got {:?}",
                self.graphql_path
            ));
        }

        if self.max_concurrent_reserves == 0 {
            return Err("MAX_CONCURRENT_RESERVES must be at least 1".to_string());
        }

        Ok(())
    }

    pub fn log_configuration(&self) {
        log::info!("Configuration:");

        if self.rpc_url.is_some() {
            log::info!("  RPC endpoint: explicit RPC_URL");
        } else if self.infura_api_key.is_some() {
            log::info!("  RPC endpoint: Infura ({})", self.ethereum_network);
        } else {
            log::error!("  INFURA_API_KEY or RPC_URL is required");
        }

        log::info!("  Pool: {}", self.pool_address);
        log::info!("  Pool data provider: {}", self.data_provider_address);
        log::info!("  HTTP port: {}", self.port);
        log::info!("  GraphQL path: {}", self.graphql_path);
        log::info!(
            "  Max concurrent reserve reads: {}",
            self.max_concurrent_reserves
        );
    }
}
