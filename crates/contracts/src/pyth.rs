//! Pyth pull-oracle interface.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IPyth {
        function updatePriceFeeds(bytes[] calldata updateData) external payable;
        function getUpdateFee(bytes[] calldata updateData) external view returns (uint256 feeAmount);
    }
}
