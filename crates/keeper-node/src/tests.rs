//! Tests for the node and matcher clients.

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use keeper_api::{PublishError, Publisher};

use crate::error::NodeError;
use crate::matcher::MatcherClient;
use crate::node::NodeClient;
use crate::types::{MatcherConfig, NodeConfig};
use crate::Gateway;

fn node(uri: &str) -> NodeClient {
    NodeClient::new(NodeConfig {
        base_url: uri.to_string(),
    })
}

fn matcher(uri: &str) -> MatcherClient {
    MatcherClient::new(MatcherConfig {
        base_url: uri.to_string(),
    })
}

fn signed_transfer() -> serde_json::Value {
    serde_json::json!({
        "type": 4,
        "version": 2,
        "senderPublicKey": "7kPFrHDiGw1rCm7LPszuECwWYL3dMf6iMifLRDJQZMzy",
        "recipient": "3Mtest",
        "amount": {"assetId": "WAVES", "coins": 100000},
        "id": "4u4GWcpDLQvckBJTv6LMC8CTJXcv64ByQB2S7mTWFaSQ",
        "proofs": ["5QvPo..."]
    })
}

#[tokio::test]
async fn test_successful_broadcast() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/transactions/broadcast"))
        .and(body_partial_json(serde_json::json!({"type": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "4u4GWcpDLQvckBJTv6LMC8CTJXcv64ByQB2S7mTWFaSQ",
            "type": 4,
            "applicationStatus": "succeeded"
        })))
        .mount(&server)
        .await;

    let resp = node(&server.uri()).broadcast(&signed_transfer()).await.unwrap();
    assert_eq!(resp.id, "4u4GWcpDLQvckBJTv6LMC8CTJXcv64ByQB2S7mTWFaSQ");
    assert_eq!(resp.application_status.as_deref(), Some("succeeded"));
}

#[tokio::test]
async fn test_rejected_broadcast() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/transactions/broadcast"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": 112,
            "message": "State check failed. Reason: negative waves balance"
        })))
        .mount(&server)
        .await;

    let err = node(&server.uri()).broadcast(&signed_transfer()).await.unwrap_err();
    let NodeError::Rejected { code, message } = err else {
        panic!("expected rejection, got {err}");
    };
    assert_eq!(code, 112);
    assert!(message.contains("negative waves balance"));
}

#[tokio::test]
async fn test_server_error_without_structured_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/transactions/broadcast"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = node(&server.uri()).broadcast(&signed_transfer()).await.unwrap_err();
    assert!(matches!(
        err,
        NodeError::ServerError { status_code: 503, .. }
    ));
}

#[tokio::test]
async fn test_transaction_info_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/info/unknown"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = node(&server.uri()).transaction_info("unknown").await.unwrap_err();
    assert!(matches!(err, NodeError::NotFound));
}

#[tokio::test]
async fn test_order_placement_and_cancellation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/matcher/orderbook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "status": "OrderAccepted"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/matcher/orderbook/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "status": "OrderCanceled"
        })))
        .mount(&server)
        .await;

    let client = matcher(&server.uri());
    let placed = client
        .place_order(&serde_json::json!({"type": 1002}))
        .await
        .unwrap();
    assert_eq!(placed.status.as_deref(), Some("OrderAccepted"));

    let cancelled = client
        .cancel_order(&serde_json::json!({"type": 1003, "id": "x"}))
        .await
        .unwrap();
    assert_eq!(cancelled.status.as_deref(), Some("OrderCanceled"));
}

#[tokio::test]
async fn test_gateway_maps_rejections_for_the_keeper() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/transactions/broadcast"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": 199,
            "message": "too big"
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(
        NodeConfig {
            base_url: server.uri(),
        },
        MatcherConfig {
            base_url: server.uri(),
        },
    );

    let err = gateway
        .publish_transaction(&signed_transfer())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PublishError::Rejected { code: 199, .. }
    ));
}
