use alloy::{
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use async_trait::async_trait;

use crate::{
    contracts::{IERC20Metadata, IPool, IPoolDataProvider},
    error::{FetchResult, PositionsError},
    models::{TokenMetadata, UserReserveData},
    reader::LendingPoolReader,
};

/// Reads pool state from an Ethereum node over JSON-RPC.
#[derive(Clone)]
pub struct OnChainReader {
    provider: DynProvider,
    pool: Address,
    data_provider: Address,
}

impl OnChainReader {
    pub fn connect(rpc_url: &str, pool: Address, data_provider: Address) -> Result<Self, String> {
        let url: Url = rpc_url
            .parse()
            .map_err(|e| format!("Invalid RPC URL: {}", e))?;

        let provider = ProviderBuilder::new().connect_http(url).erased();

        Ok(Self {
            provider,
            pool,
            data_provider,
        })
    }
}

#[async_trait]
impl LendingPoolReader for OnChainReader {
    async fn reserves_list(&self) -> FetchResult<Vec<Address>> {
        let pool = IPool::new(self.pool, self.provider.clone());

        pool.getReservesList()
            .call()
            .await
            .map_err(|e| PositionsError::contract("getReservesList", e))
    }

    async fn user_configuration(&self, user: Address) -> FetchResult<U256> {
        let pool = IPool::new(self.pool, self.provider.clone());

        pool.getUserConfiguration(user)
            .call()
            .await
            .map_err(|e| PositionsError::contract("getUserConfiguration", e))
    }

    async fn user_reserve_data(
        &self,
        asset: Address,
        user: Address,
    ) -> FetchResult<UserReserveData> {
        let data_provider = IPoolDataProvider::new(self.data_provider, self.provider.clone());

        let data = data_provider
            .getUserReserveData(asset, user)
            .call()
            .await
            .map_err(|e| PositionsError::contract("getUserReserveData", e))?;

        Ok(UserReserveData {
            current_a_token_balance: data.currentATokenBalance,
            current_stable_debt: data.currentStableDebt,
            current_variable_debt: data.currentVariableDebt,
            stable_borrow_rate: data.stableBorrowRate,
            liquidity_rate: data.liquidityRate,
        })
    }

    async fn token_metadata(&self, asset: Address) -> FetchResult<TokenMetadata> {
        let token = IERC20Metadata::new(asset, self.provider.clone());

        let (symbol, decimals) = tokio::try_join!(
            async {
                token
                    .symbol()
                    .call()
                    .await
                    .map_err(|e| PositionsError::contract("symbol", e))
            },
            async {
                token
                    .decimals()
                    .call()
                    .await
                    .map_err(|e| PositionsError::contract("decimals", e))
            },
        )?;

        Ok(TokenMetadata { symbol, decimals })
    }
}
