//! Minimal canned HTTP listener for tests that assert on the exact
//! request a harness step put on the wire.
//!
//! Unlike a real cluster it holds no state: every connection gets the
//! same `200 OK` body, and what was received is recorded for the test to
//! inspect. Each connection is closed after one exchange.

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// One request as the listener saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    /// Path including the query string, e.g. `/test/_bulk?refresh=true`.
    pub path: String,
    pub body: String,
}

/// HTTP/1.1 listener on `127.0.0.1:0` answering every exchange alike.
pub struct RecordingStub {
    addr: SocketAddr,
    requests: mpsc::UnboundedReceiver<SeenRequest>,
}

impl RecordingStub {
    /// Start a listener that answers every request with `response_body`.
    pub async fn start(response_body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener addr");
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let Ok(seen) = read_request(&mut stream).await else {
                    return;
                };
                if tx.send(seen).is_err() {
                    return;
                }
                let payload = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response_body.len(),
                    response_body
                );
                let _ = stream.write_all(payload.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self { addr, requests: rx }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Next recorded request, in arrival order.
    pub async fn seen(&mut self) -> SeenRequest {
        self.requests
            .recv()
            .await
            .expect("stub received fewer requests than expected")
    }

    /// True when nothing further has arrived.
    pub fn no_more_requests(&mut self) -> bool {
        self.requests.try_recv().is_err()
    }
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<SeenRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split(' ');
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Ok(SeenRequest {
        method,
        path,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
