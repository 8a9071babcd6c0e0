use std::str::FromStr;

use alloy::primitives::Address;
use async_graphql::{Context, EmptyMutation, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::{error::PositionsError, models::PositionsResult, positions::PositionFetcher};

pub type PositionsSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(fetcher: PositionFetcher) -> PositionsSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(fetcher)
        .finish()
}

/// Accepts `0x` followed by exactly 40 hex digits, any case.
pub fn validate_wallet_address(input: &str) -> Result<Address, PositionsError> {
    let hex = input
        .strip_prefix("0x")
        .ok_or(PositionsError::InvalidWalletAddress)?;

    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PositionsError::InvalidWalletAddress);
    }

    Address::from_str(input).map_err(|_| PositionsError::InvalidWalletAddress)
}

impl ErrorExtensions for PositionsError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Collateral and debt positions held by `walletAddress` on Aave V3.
    async fn aave_positions(
        &self,
        ctx: &Context<'_>,
        wallet_address: String,
    ) -> async_graphql::Result<Option<PositionsResult>> {
        let wallet = validate_wallet_address(&wallet_address).map_err(|e| {
            log::debug!("Rejected wallet address {:?}", wallet_address);
            e.extend()
        })?;

        let fetcher = ctx.data::<PositionFetcher>()?;

        let positions = fetcher.fetch_positions(wallet).await.map_err(|e| {
            log::error!("Error fetching AAVE positions for {}: {}", wallet, e);
            e.extend()
        })?;

        Ok(Some(positions))
    }
}
