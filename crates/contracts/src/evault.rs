//! Euler vault (EVault) interface.
//!
//! EVaults are ERC-4626 vaults with borrow accounting on top. Only the view
//! functions read by the lens client and the `borrow` entry point used by the
//! batched borrow are bound here.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IEVault {
        // ERC-20 / ERC-4626 metadata
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function asset() external view returns (address);
        function totalAssets() external view returns (uint256);
        function totalSupply() external view returns (uint256);

        // Borrow accounting
        function totalBorrows() external view returns (uint256);
        function interestRate() external view returns (uint256);
        function accumulatedFees() external view returns (uint256);

        function borrow(uint256 amount, address receiver) external returns (uint256);
    }
}
