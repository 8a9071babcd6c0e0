use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use crate::{
    error::FetchResult,
    models::{TokenMetadata, UserReserveData},
};

/// Read-only access to the lending pool, one method per remote read.
#[async_trait]
pub trait LendingPoolReader: Send + Sync {
    /// All reserves supported by the pool, in pool order.
    async fn reserves_list(&self) -> FetchResult<Vec<Address>>;

    /// Packed collateral/borrow flags for `user`.
    async fn user_configuration(&self, user: Address) -> FetchResult<U256>;

    async fn user_reserve_data(&self, asset: Address, user: Address)
        -> FetchResult<UserReserveData>;

    async fn token_metadata(&self, asset: Address) -> FetchResult<TokenMetadata>;
}
