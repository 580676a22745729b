//! Ethereum Vault Connector (EVC) batch interface.
//!
//! The EVC executes an ordered list of sub-calls in one execution context.
//! `batchSimulation` runs the same list without committing and returns one
//! result per item, in item order.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IEVC {
        struct SimulationItem {
            address targetContract;
            address onBehalfOfAccount;
            uint256 value;
            bytes data;
        }

        #[derive(Debug)]
        struct SimulationResult {
            bool success;
            bytes result;
        }

        function batch(SimulationItem[] calldata items) external payable;
        function batchSimulation(SimulationItem[] calldata items) external returns (SimulationResult[] memory results);
    }
}

pub use IEVC::{SimulationItem, SimulationResult};
