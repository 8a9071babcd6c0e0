use std::sync::Arc;

use alloy::primitives::{Address, U256};
use chrono::{SecondsFormat, Utc};
use futures::{stream, StreamExt, TryStreamExt};

use crate::{
    error::FetchResult,
    models::{Position, PositionsResult, TokenMetadata, UserReserveData},
    reader::LendingPoolReader,
    units::{format_units, ray_to_f64},
    user_config::{decode_user_configuration, ReserveFlags},
};

/// Assembles a wallet's collateral and debt positions from pool reads.
#[derive(Clone)]
pub struct PositionFetcher {
    reader: Arc<dyn LendingPoolReader>,
    max_concurrent_reserves: usize,
}

/// Everything read for one active reserve.
struct ReserveSnapshot {
    asset: Address,
    flags: ReserveFlags,
    user_data: UserReserveData,
    token: TokenMetadata,
}

impl PositionFetcher {
    pub fn new(reader: Arc<dyn LendingPoolReader>, max_concurrent_reserves: usize) -> Self {
        Self {
            reader,
            max_concurrent_reserves: max_concurrent_reserves.max(1),
        }
    }

    pub async fn fetch_positions(&self, wallet: Address) -> FetchResult<PositionsResult> {
        let reserves = self.reader.reserves_list().await?;
        let bitmap = self.reader.user_configuration(wallet).await?;

        let active: Vec<(Address, ReserveFlags)> = reserves
            .iter()
            .copied()
            .zip(decode_user_configuration(bitmap, reserves.len()))
            .filter(|(_, flags)| flags.is_active())
            .collect();

        log::debug!(
            "Wallet {} active in {}/{} reserves",
            wallet,
            active.len(),
            reserves.len()
        );

        // `buffered` yields in input order, so snapshots stay in reserve order
        // whatever order the reads complete in.
        let snapshots: Vec<ReserveSnapshot> = stream::iter(active)
            .map(|(asset, flags)| self.read_reserve(wallet, asset, flags))
            .buffered(self.max_concurrent_reserves)
            .try_collect()
            .await?;

        let result = assemble_positions(&snapshots, &timestamp_now());

        log::info!(
            "Wallet {}: {} collateral, {} borrowing positions",
            wallet,
            result.collateral_positions.len(),
            result.borrowing_positions.len()
        );

        Ok(result)
    }

    async fn read_reserve(
        &self,
        wallet: Address,
        asset: Address,
        flags: ReserveFlags,
    ) -> FetchResult<ReserveSnapshot> {
        let (user_data, token) = tokio::try_join!(
            self.reader.user_reserve_data(asset, wallet),
            self.reader.token_metadata(asset),
        )?;

        Ok(ReserveSnapshot {
            asset,
            flags,
            user_data,
            token,
        })
    }
}

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn assemble_positions(snapshots: &[ReserveSnapshot], timestamp: &str) -> PositionsResult {
    let mut result = PositionsResult::default();

    for snapshot in snapshots {
        let data = &snapshot.user_data;
        let position = |amount: U256, interest_rate: f64| Position {
            token_symbol: snapshot.token.symbol.clone(),
            token_address: snapshot.asset.to_checksum(None),
            amount: format_units(amount, snapshot.token.decimals),
            amount_usd: 0.0,
            interest_rate,
            last_update_timestamp: timestamp.to_string(),
        };

        if snapshot.flags.is_collateral && !data.current_a_token_balance.is_zero() {
            result.collateral_positions.push(position(
                data.current_a_token_balance,
                ray_to_f64(data.liquidity_rate),
            ));
        }

        if snapshot.flags.is_borrowed {
            // variable borrow rate is not part of the per-user data
            if !data.current_variable_debt.is_zero() {
                result
                    .borrowing_positions
                    .push(position(data.current_variable_debt, 0.0));
            }

            if !data.current_stable_debt.is_zero() {
                result.borrowing_positions.push(position(
                    data.current_stable_debt,
                    ray_to_f64(data.stable_borrow_rate),
                ));
            }
        }
    }

    result
}
