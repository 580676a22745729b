//! Error handling tests for the API crate.

mod helpers;

use std::sync::Arc;

use euler_rs_api::{ApiError, ErrorCategory, Network, PriceClient, SubgraphClient};
use helpers::{
    mock_graphql_errors, mock_http_error, mock_null_data, registry_with_mock, start_mock_server,
};
use serde_json::json;

fn subgraph(server: &wiremock::MockServer) -> SubgraphClient {
    SubgraphClient::new(Arc::new(registry_with_mock(server, Network::Mainnet)))
}

#[tokio::test]
async fn test_graphql_error_single() {
    let server = start_mock_server().await;
    mock_graphql_errors(&server, &["Invalid query"], serde_json::Value::Null).await;

    let err = subgraph(&server)
        .vault_statuses(Network::Mainnet)
        .await
        .unwrap_err();

    match &err {
        ApiError::GraphQL(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, "Invalid query");
        }
        e => panic!("Expected GraphQL error, got: {:?}", e),
    }
    assert_eq!(err.error_category(), ErrorCategory::Query);
}

#[tokio::test]
async fn test_graphql_error_multiple() {
    let server = start_mock_server().await;
    mock_graphql_errors(&server, &["Error 1", "Error 2", "Error 3"], serde_json::Value::Null).await;

    let err = subgraph(&server).borrows(Network::Mainnet).await.unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("Error 1"));
    assert!(msg.contains("Error 2"));
    assert!(msg.contains("Error 3"));
    assert!(msg.contains(';'));
}

#[tokio::test]
async fn test_graphql_errors_discard_partial_data() {
    let server = start_mock_server().await;
    let partial = json!({
        "vaultStatuses": [{
            "id": "0x01-1",
            "accumulatedFees": "1",
            "interestRate": "1",
            "totalBorrows": "1",
            "totalShares": "1"
        }]
    });
    mock_graphql_errors(&server, &["indexing_error"], partial).await;

    let result = subgraph(&server).vault_statuses(Network::Mainnet).await;

    assert!(matches!(result, Err(ApiError::GraphQL(_))));
}

#[tokio::test]
async fn test_graphql_errors_win_over_mistyped_data() {
    let server = start_mock_server().await;
    // a null list does not fit `Vec<VaultStatus>`
    mock_graphql_errors(&server, &["indexing_error"], json!({ "vaultStatuses": null })).await;

    let err = subgraph(&server)
        .vault_statuses(Network::Mainnet)
        .await
        .unwrap_err();

    assert_eq!(err.error_category(), ErrorCategory::Query);
    match err {
        ApiError::GraphQL(errors) => assert_eq!(errors[0].message, "indexing_error"),
        e => panic!("Expected GraphQL error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_mistyped_data_without_errors_is_parse_error() {
    let server = start_mock_server().await;
    mock_graphql_errors(&server, &[], json!({ "vaultStatuses": null })).await;

    let err = subgraph(&server)
        .vault_statuses(Network::Mainnet)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_no_data() {
    let server = start_mock_server().await;
    mock_null_data(&server).await;

    let err = subgraph(&server)
        .euler_vaults(Network::Mainnet)
        .await
        .unwrap_err();

    match err {
        ApiError::Parse(msg) => assert!(msg.contains("No data")),
        e => panic!("Expected Parse error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_http_error_status() {
    let server = start_mock_server().await;
    mock_http_error(&server, 500).await;

    let err = subgraph(&server)
        .liquidates(Network::Mainnet)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::HttpStatus { status: 500, .. }));
    assert_eq!(err.error_category(), ErrorCategory::Transport);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_http_client_error_not_retryable() {
    let server = start_mock_server().await;
    mock_http_error(&server, 404).await;

    let err = subgraph(&server)
        .liquidates(Network::Mainnet)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::HttpStatus { status: 404, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let server = start_mock_server().await;
    let registry = registry_with_mock(&server, Network::Mainnet);
    drop(server);

    let err = SubgraphClient::new(Arc::new(registry))
        .vault_statuses(Network::Mainnet)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Request(_)));
    assert_eq!(err.error_category(), ErrorCategory::Transport);
}

#[tokio::test]
async fn test_price_api_http_error() {
    let server = start_mock_server().await;
    mock_http_error(&server, 503).await;

    let client = PriceClient::new(Arc::new(registry_with_mock(&server, Network::Mainnet)));
    let err = client
        .fetch_prices(Network::Mainnet, &[alloy::primitives::Address::ZERO])
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::HttpStatus { status: 503, .. }));
}
