//! Integration tests for the price feed module

use btc_tracker::config::FeedConfig;
use btc_tracker::feed::{CoinbaseClient, CoinbaseConfig, FetchError, PriceSource};
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve a single canned HTTP response on loopback
///
/// Returns the base URL and a receiver for the request line.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let request = String::from_utf8_lossy(&request);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = request_tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (format!("http://{addr}"), request_rx)
}

fn client_for(base_url: String) -> CoinbaseClient {
    let feed = FeedConfig {
        base_url,
        pair: "BTC-USD".to_string(),
        timeout_secs: 5,
    };
    CoinbaseClient::with_config(CoinbaseConfig::from(&feed)).unwrap()
}

#[tokio::test]
async fn test_fetch_price_success() {
    let (base_url, request_rx) =
        serve_once("200 OK", r#"{"data":{"amount":"1.23","base":"BTC","currency":"USD"}}"#).await;

    let price = client_for(base_url).fetch_price().await.unwrap();
    assert_eq!(price, dec!(1.23));

    let request_line = request_rx.await.unwrap();
    assert_eq!(request_line, "GET /v2/prices/BTC-USD/spot HTTP/1.1");
}

#[tokio::test]
async fn test_fetch_price_error_status() {
    let (base_url, _request_rx) = serve_once(
        "404 Not Found",
        r#"{"errors":[{"id":"not_found","message":"Invalid currency"}]}"#,
    )
    .await;

    let result = client_for(base_url).fetch_price().await;
    match result {
        Err(FetchError::Status { status, body }) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(body.contains("Invalid currency"));
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_price_empty_amount() {
    let (base_url, _request_rx) = serve_once("200 OK", r#"{"data":{}}"#).await;

    let result = client_for(base_url).fetch_price().await;
    assert!(matches!(result, Err(FetchError::MissingAmount)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_fetch_error() {
    // Nothing listens on the discard port
    let client = client_for("http://127.0.0.1:9".to_string());
    let result = client.fetch_price().await;
    assert!(matches!(result, Err(FetchError::Http(_))));
}
