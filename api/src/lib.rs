//! Aave Positions API - reports a wallet's Aave V3 collateral and debt
//! positions, read live from the chain and served over GraphQL.

pub mod chain;
pub mod config;
pub mod contracts;
pub mod error;
pub mod health;
pub mod models;
pub mod positions;
pub mod reader;
pub mod schema;
pub mod server;
pub mod signals;
pub mod units;
pub mod user_config;

// Re-export commonly used types for convenience
pub use chain::OnChainReader;
pub use config::{Args, Config};
pub use error::{FetchResult, PositionsError};
pub use models::{Position, PositionsResult, TokenMetadata, UserReserveData};
pub use positions::PositionFetcher;
pub use reader::LendingPoolReader;
pub use schema::{build_schema, validate_wallet_address, PositionsSchema};
pub use server::{build_router, serve};
