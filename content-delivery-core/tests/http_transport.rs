//! Drives `HttpTransport` against a one-shot HTTP server on localhost.

mod fixtures;

use content_delivery_core::contract::{ContentError, Transport, TransportError};
use content_delivery_core::transport::HttpTransport;
use content_delivery_core::{ContentClient, ContentClientConfig};
use fixtures::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve a single response; resolves the request line through the receiver.
async fn serve_once(status_line: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let request = String::from_utf8_lossy(&request);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = request_tx.send(request_line);

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    (format!("http://{addr}"), request_rx)
}

fn transport(base_url: &str) -> HttpTransport {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpTransport::with_client(client, base_url).unwrap()
}

#[tokio::test]
async fn fetches_and_decodes_query_response() {
    let (base_url, request) = serve_once("HTTP/1.1 200 OK", single_result().to_string()).await;
    let transport = transport(&base_url);

    let body = transport.get_json(QUERY_URL).await.unwrap();
    assert_eq!(body, single_result());

    let request_line = request.await.unwrap();
    assert!(request_line.starts_with("GET /cms/content/query?query="), "{request_line}");
    assert!(request_line.contains("store=test"), "{request_line}");
}

#[tokio::test]
async fn maps_error_status_to_transport_error() {
    let (base_url, _request) = serve_once("HTTP/1.1 404 Not Found", "{}".to_string()).await;
    let transport = transport(&base_url);

    let err = transport.get_json(QUERY_URL).await.unwrap_err();
    assert!(matches!(err, TransportError::Status(404)), "got {err:?}");
}

#[tokio::test]
async fn rejects_undecodable_body() {
    let (base_url, _request) = serve_once("HTTP/1.1 200 OK", "not json".to_string()).await;
    let transport = transport(&base_url);

    let err = transport.get_json(QUERY_URL).await.unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn client_fetches_legacy_item_over_http() {
    let (base_url, _request) =
        serve_once("HTTP/1.1 200 OK", single_legacy_result().to_string()).await;
    let client = ContentClient::with_transport(ContentClientConfig::new("test"), transport(&base_url));

    let item = client.get_content_item(DELIVERY_ID).await.unwrap();
    assert_eq!(item.meta().delivery_id, DELIVERY_ID);
    assert_eq!(item.meta().name.as_deref(), Some("Title"));
    assert_eq!(item.body.field("_title"), Some(&serde_json::json!("Title")));
}

#[tokio::test]
async fn client_reports_not_found_over_http() {
    let (base_url, _request) = serve_once("HTTP/1.1 200 OK", no_results().to_string()).await;
    let client = ContentClient::with_transport(ContentClientConfig::new("test"), transport(&base_url));

    let err = client.get_content_item(DELIVERY_ID).await.unwrap_err();
    assert!(matches!(err, ContentError::NotFound { .. }), "got {err:?}");
}
