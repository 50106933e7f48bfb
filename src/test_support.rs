// src/test_support.rs
// A one-shot HTTP responder that stands in for the GitHub API in tests.

use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct MockServer {
    // Base URL to pass where the GitHub API base is expected.
    pub base: String,
    request: oneshot::Receiver<String>,
}

impl MockServer {
    // The request line of the single request the server answered.
    pub async fn request_line(self) -> String {
        self.request.await.expect("mock server received no request")
    }
}

// Client that ignores proxy environment variables, so requests to the
// loopback responder always go direct.
pub fn test_client() -> Client {
    Client::builder()
        .no_proxy()
        .build()
        .expect("failed to build test client")
}

// Accepts one connection and answers it with `status` and a JSON `body`.
pub async fn serve_once(status: &str, body: &str) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut received = Vec::new();
        let mut chunk = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&chunk[..n]);
        }

        let request = String::from_utf8_lossy(&received);
        let _ = tx.send(request.lines().next().unwrap_or_default().to_string());

        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
    });

    MockServer {
        base: format!("http://{}", addr),
        request: rx,
    }
}
