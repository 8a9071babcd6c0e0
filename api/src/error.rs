use thiserror::Error;

#[derive(Debug, Error)]
pub enum PositionsError {
    #[error("Invalid Ethereum wallet address format")]
    InvalidWalletAddress,

    #[error("Failed to fetch AAVE positions: {0}")]
    Upstream(String),

    #[error("Failed to fetch AAVE positions: malformed contract response: {0}")]
    Decoding(String),
}

impl PositionsError {
    /// Machine readable code attached to GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            PositionsError::InvalidWalletAddress => "VALIDATION_ERROR",
            PositionsError::Upstream(_) => "UPSTREAM_ERROR",
            PositionsError::Decoding(_) => "DECODING_ERROR",
        }
    }

    /// Classifies a failed contract call, prefixing the cause with the call
    /// that produced it.
    pub fn contract(call: &str, err: alloy::contract::Error) -> Self {
        match err {
            alloy::contract::Error::TransportError(e) => {
                PositionsError::Upstream(format!("{} failed: {}", call, e))
            }
            other => PositionsError::Decoding(format!("{}: {}", call, other)),
        }
    }
}

pub type FetchResult<T> = Result<T, PositionsError>;
