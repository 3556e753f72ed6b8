//! Client behaviour against a one-shot HTTP stub

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::{ApiError, DictApi, MdictClient};

/// Serve exactly one request, hand back its request line
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let head = String::from_utf8_lossy(&buf).to_string();
        head.lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn test_lookup_all_decodes_response() {
    let body = r#"{"word":"hello world","results":[{"word":"hello world","uuid":"u1","title":"Oxford","logo":"/logo.png","found":true,"html":"<b>hi</b>"}],"total":1}"#;
    let (base, server) = serve_once("200 OK", body).await;

    let client = MdictClient::new(format!("{base}/"));
    let result = timeout(Duration::from_secs(5), client.lookup_all("hello world"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.results[0].title.as_deref(), Some("Oxford"));

    let request_line = server.await.unwrap();
    assert_eq!(request_line, "GET /api/lookup/hello%20world HTTP/1.1");
}

#[tokio::test]
async fn test_non_success_status_is_generic_error() {
    let (base, server) = serve_once("404 Not Found", "").await;

    let client = MdictClient::new(base);
    let err = timeout(Duration::from_secs(5), client.get_word_meta("zzz"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, ApiError::Status(404)));
    assert_eq!(err.to_string(), "API error: 404");
    server.await.unwrap();
}

#[tokio::test]
async fn test_post_without_body() {
    let (base, server) = serve_once("200 OK", r#"{"ok":true}"#).await;

    let client = MdictClient::new(base);
    let ok = client.clear_history().await.unwrap();
    assert!(ok.ok);

    let request_line = server.await.unwrap();
    assert_eq!(request_line, "POST /api/history/clear HTTP/1.1");
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let (base, server) = serve_once("200 OK", "not json").await;

    let client = MdictClient::new(base);
    let err = client.get_dicts().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    server.await.unwrap();
}
