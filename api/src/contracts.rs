//! Contract interfaces and Aave V3 Ethereum mainnet deployment addresses.

use alloy::{
    primitives::{address, Address},
    sol,
};

pub const AAVE_V3_POOL: Address = address!("87870Bca3F3fD6335C3F4ce8392D69350B4fA4E2");
pub const AAVE_V3_POOL_DATA_PROVIDER: Address =
    address!("7B4EB56E7CD4b454BA8ff71E4518426369a138a3");

sol! {
    #[sol(rpc)]
    interface IPool {
        function getUserConfiguration(address user) external view returns (uint256);
        function getReservesList() external view returns (address[] memory);
    }

    #[sol(rpc)]
    interface IPoolDataProvider {
        function getUserReserveData(address asset, address user) external view returns (
            uint256 currentATokenBalance,
            uint256 currentStableDebt,
            uint256 currentVariableDebt,
            uint256 principalStableDebt,
            uint256 scaledVariableDebt,
            uint256 stableBorrowRate,
            uint256 liquidityRate,
            uint40 stableRateLastUpdated,
            bool usageAsCollateralEnabled
        );
    }

    #[sol(rpc)]
    interface IERC20Metadata {
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
    }
}
