use std::time::Duration;

use oas_invoke_core::HttpMethod;
use oas_invoke_exec::{HttpClient, HttpError, HttpRequestParts, ReqwestHttpClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

fn client() -> ReqwestHttpClient {
    let inner = reqwest::Client::builder().no_proxy().build().unwrap();
    ReqwestHttpClient::from_client(inner)
}

fn response(status_line: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut out = format!("HTTP/1.1 {status_line}\r\n");
    for (k, v) in headers {
        out.push_str(&format!("{k}: {v}\r\n"));
    }
    out.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ));
    out
}

async fn read_request(sock: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = sock.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Accepts one connection, answers with `reply`, and yields the raw request text.
async fn serve_once(reply: String) -> (url::Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let raw = read_request(&mut sock).await;
        sock.write_all(reply.as_bytes()).await.unwrap();
        let _ = sock.shutdown().await;
        raw
    });
    (url::Url::parse(&format!("http://{addr}/")).unwrap(), handle)
}

fn get(url: url::Url) -> HttpRequestParts {
    HttpRequestParts {
        method: HttpMethod::Get,
        url,
        headers: vec![],
        body: None,
    }
}

#[tokio::test]
async fn repeated_response_headers_keep_every_value() {
    let (base, server) = serve_once(response(
        "404 Not Found",
        &[
            ("Content-Type", "application/json"),
            ("Set-Cookie", "a=1"),
            ("Set-Cookie", "b=2"),
        ],
        r#"{"error":"missing"}"#,
    ))
    .await;

    let resp = client()
        .send(get(base.join("pets/9").unwrap()), Duration::from_secs(5), 1024)
        .await
        .unwrap();

    assert_eq!(resp.status, 404);
    assert_eq!(resp.headers["set-cookie"], vec!["a=1", "b=2"]);
    assert_eq!(resp.headers["content-type"], vec!["application/json"]);
    assert_eq!(resp.body, br#"{"error":"missing"}"#);

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /pets/9 HTTP/1.1\r\n"), "{raw}");
}

#[tokio::test]
async fn request_headers_and_body_are_sent() {
    let (base, server) = serve_once(response("201 Created", &[], "{}")).await;

    let req = HttpRequestParts {
        method: HttpMethod::Post,
        url: base.join("pets").unwrap(),
        headers: vec![
            ("X-Trace".to_string(), "abc".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ],
        body: Some(br#"{"name":"Rex"}"#.to_vec()),
    };
    let resp = client().send(req, Duration::from_secs(5), 1024).await.unwrap();
    assert_eq!(resp.status, 201);

    let raw = server.await.unwrap();
    let lower = raw.to_ascii_lowercase();
    assert!(raw.starts_with("POST /pets HTTP/1.1\r\n"), "{raw}");
    assert!(lower.contains("x-trace: abc\r\n"), "{raw}");
    assert!(lower.contains("content-type: application/json\r\n"), "{raw}");
    assert!(raw.ends_with(r#"{"name":"Rex"}"#), "{raw}");
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let body = "x".repeat(1000);
    let (base, _server) = serve_once(response("200 OK", &[], &body)).await;

    let err = client()
        .send(get(base), Duration::from_secs(5), 100)
        .await
        .unwrap_err();

    assert_eq!(err, HttpError::ResponseTooLarge { max_bytes: 100 });
}

#[tokio::test]
async fn slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let _ = read_request(&mut sock).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let url = url::Url::parse(&format!("http://{addr}/slow")).unwrap();
    let err = client()
        .send(get(url), Duration::from_millis(200), 1024)
        .await
        .unwrap_err();

    assert_eq!(err, HttpError::Timeout);
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = url::Url::parse(&format!("http://{addr}/")).unwrap();
    let err = client()
        .send(get(url), Duration::from_secs(5), 1024)
        .await
        .unwrap_err();

    assert!(matches!(err, HttpError::Network(_)), "{err:?}");
}
