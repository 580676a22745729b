//! GraphQL query definitions for the Euler v2 subgraph.
//!
//! Each query is a fixed document with a fixed page size. List queries take
//! no variables; single-entity queries take the entity id.

use serde::Serialize;

/// Variables of list queries; serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoVariables {}

/// Variables of single-entity queries.
#[derive(Debug, Clone, Serialize)]
pub struct ById {
    pub id: String,
}

impl ById {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

macro_rules! subgraph_query {
    (
        $(#[$meta:meta])*
        $name:ident {
            operation: $operation:literal,
            variables: $variables:ty,
            data: $data:ty,
            document: $document:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name;

        impl GraphQLQuery for $name {
            type Variables = $variables;
            type ResponseData = $data;

            fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                QueryBody {
                    variables,
                    query: $document,
                    operation_name: $operation,
                }
            }
        }
    };
}

pub(crate) use subgraph_query;

pub mod activity;
pub mod vaults;

pub use activity::{GetBorrow, GetBorrows, GetLiquidate, GetLiquidates};
pub use vaults::{GetEulerVault, GetEulerVaults, GetVaultStatus, GetVaultStatuses};
