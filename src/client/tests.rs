use rstest::rstest;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::WalletClient;
use crate::domain::FlowError;
use crate::test_utils::JsonMother;

async fn client_for(server: &MockServer) -> WalletClient {
    WalletClient::new(&server.uri()).unwrap()
}

#[tokio::test]
async fn test_get_transactions_decodes_history() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/transactions/A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(JsonMother::simple_transactions()))
        .expect(1)
        .mount(&server)
        .await;

    let txns = client_for(&server).await.get_transactions("A").await.unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].hash, "T1");
    assert_eq!(txns[0].inputs[0].resolved(), Some(("A", 100_000_000)));
    assert_eq!(txns[0].btc_to_usd_rate, 50_000.0);
}

#[tokio::test]
async fn test_get_balance_is_positional() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/balance/A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(JsonMother::balance(0.5, 21_000.0)))
        .mount(&server)
        .await;

    let balance = client_for(&server).await.get_balance("A").await.unwrap();
    assert_eq!(balance.btc, 0.5);
    assert_eq!(balance.usd, 21_000.0);
}

#[tokio::test]
async fn test_get_btc_rate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/btc_rate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("64123.5"))
        .mount(&server)
        .await;

    let rate = client_for(&server).await.get_btc_rate().await.unwrap();
    assert_eq!(rate, 64_123.5);
}

#[rstest]
#[case::server_error(500)]
#[case::not_found(404)]
#[tokio::test]
async fn test_non_success_status_is_http_error(#[case] status: u16) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/btc_rate"))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({"error": "x"})))
        .mount(&server)
        .await;

    let err = client_for(&server).await.get_btc_rate().await.unwrap_err();
    match err {
        FlowError::Http { status: got, url } => {
            assert_eq!(got, status);
            assert!(url.ends_with("/btc_rate"));
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_object_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/balance/A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "x"})))
        .mount(&server)
        .await;

    let err = client_for(&server).await.get_balance("A").await.unwrap_err();
    assert!(matches!(err, FlowError::Parse { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = WalletClient::new(&uri).unwrap();
    let err = client.get_btc_rate().await.unwrap_err();
    assert!(matches!(err, FlowError::Network(_)));
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = WalletClient::new("http://127.0.0.1:5000/").unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:5000");
}
