//! Perspective registry interface (verified-vault lists).

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IPerspective {
        function name() external view returns (string);
        function verifiedArray() external view returns (address[]);
        function verifiedLength() external view returns (uint256);
        function isVerified(address vault) external view returns (bool);
    }
}
