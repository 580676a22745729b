//! Account lens interface.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IAccountLens {
        struct AccountLiquidity {
            uint256 totalCollateralValue;
            uint256 totalDebtValue;
            uint256 availableBorrows;
        }

        function getAccountLiquidity(address account, address vault) external view returns (AccountLiquidity memory);
    }
}
