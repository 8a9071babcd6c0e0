use alloy::primitives::U256;
use async_graphql::SimpleObject;

/// One collateral or debt entry as returned to API clients.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Position {
    pub token_symbol: String,
    pub token_address: String,
    /// Decimal string in whole token units.
    pub amount: String,
    /// No price source is wired in, always `0`.
    #[graphql(name = "amountUSD")]
    pub amount_usd: f64,
    /// Annual rate as a fraction, `0.05` is 5%.
    pub interest_rate: f64,
    /// Time the position was read, RFC 3339.
    pub last_update_timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, SimpleObject)]
#[graphql(name = "AavePositions")]
pub struct PositionsResult {
    #[graphql(name = "collateral_positions")]
    pub collateral_positions: Vec<Position>,
    #[graphql(name = "borrowing_positions")]
    pub borrowing_positions: Vec<Position>,
}

/// Per-user balances of a single reserve, raw on-chain integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserReserveData {
    pub current_a_token_balance: U256,
    pub current_stable_debt: U256,
    pub current_variable_debt: U256,
    /// Ray
    pub stable_borrow_rate: U256,
    /// Ray
    pub liquidity_rate: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub symbol: String,
    pub decimals: u8,
}
