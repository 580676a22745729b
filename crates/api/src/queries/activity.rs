//! Borrow and liquidation event queries.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::Deserialize;

use super::{subgraph_query, ById, NoVariables};
use crate::types::{Borrow, Liquidate};

const BORROWS: &str = r"query GetBorrows {
  borrows(first: 5) {
    id
    account
    assets
    vault
  }
}";

const BORROW: &str = r"query GetBorrow($id: ID!) {
  borrow(id: $id) {
    id
    account
    assets
    vault
  }
}";

const LIQUIDATES: &str = r"query GetLiquidates {
  liquidates(first: 5) {
    id
    liquidator
    repayAssets
    yieldBalance
    violator
  }
}";

const LIQUIDATE: &str = r"query GetLiquidate($id: ID!) {
  liquidate(id: $id) {
    id
    liquidator
    repayAssets
    yieldBalance
    violator
  }
}";

#[derive(Debug, Clone, Deserialize)]
pub struct BorrowsData {
    pub borrows: Vec<Borrow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BorrowData {
    pub borrow: Option<Borrow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiquidatesData {
    pub liquidates: Vec<Liquidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiquidateData {
    pub liquidate: Option<Liquidate>,
}

subgraph_query! {
    GetBorrows {
        operation: "GetBorrows",
        variables: NoVariables,
        data: BorrowsData,
        document: BORROWS,
    }
}

subgraph_query! {
    GetBorrow {
        operation: "GetBorrow",
        variables: ById,
        data: BorrowData,
        document: BORROW,
    }
}

subgraph_query! {
    GetLiquidates {
        operation: "GetLiquidates",
        variables: NoVariables,
        data: LiquidatesData,
        document: LIQUIDATES,
    }
}

subgraph_query! {
    GetLiquidate {
        operation: "GetLiquidate",
        variables: ById,
        data: LiquidateData,
        document: LIQUIDATE,
    }
}
