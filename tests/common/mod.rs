//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Start a mock upstream that echoes the request back.
///
/// The body is `"<METHOD> <TARGET>|auth=<authorization or ->|body=<body>"`,
/// and the response carries its own `Access-Control-Allow-Origin` plus an
/// `X-Upstream` marker, so the router's relaying, header forcing, and body
/// forwarding are all observable from the outside. The request body is read
/// per its framing (`Content-Length` or chunked; the router's streamed
/// forwarding arrives chunked).
pub async fn start_echo_upstream(addr: SocketAddr) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        handle_connection(&mut socket).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

async fn handle_connection(socket: &mut TcpStream) {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    // Read until the header block is complete.
    let header_end = loop {
        if let Some(pos) = find_subslice(&data, b"\r\n\r\n") {
            break pos + 4;
        }
        match socket.read(&mut buf).await {
            Ok(0) => return,
            Ok(n) => data.extend_from_slice(&buf[..n]),
            Err(_) => return,
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let target = parts.next().unwrap_or("").to_string();

    let mut auth = "-".to_string();
    let mut content_length: Option<usize> = None;
    let mut chunked = false;
    for (name, value) in lines.filter_map(|line| line.split_once(':')) {
        let value = value.trim();
        if name.eq_ignore_ascii_case("authorization") {
            auth = value.to_string();
        } else if name.eq_ignore_ascii_case("content-length") {
            content_length = value.parse().ok();
        } else if name.eq_ignore_ascii_case("transfer-encoding") {
            chunked = value.to_ascii_lowercase().contains("chunked");
        }
    }

    // Read the body until its framing says it is complete.
    let body = loop {
        let available = &data[header_end..];
        if let Some(len) = content_length {
            if available.len() >= len {
                break available[..len].to_vec();
            }
        } else if chunked {
            if let Some(decoded) = decode_chunked(available) {
                break decoded;
            }
        } else {
            break Vec::new();
        }
        match socket.read(&mut buf).await {
            Ok(0) => return,
            Ok(n) => data.extend_from_slice(&buf[..n]),
            Err(_) => return,
        }
    };

    let body = String::from_utf8_lossy(&body);
    let payload = format!("{method} {target}|auth={auth}|body={body}");
    let response_str = format!(
        "HTTP/1.1 200 OK\r\n\
         Content-Length: {}\r\n\
         Access-Control-Allow-Origin: https://upstream.example\r\n\
         X-Upstream: hit\r\n\
         Connection: close\r\n\r\n{}",
        payload.len(),
        payload
    );
    let _ = socket.write_all(response_str.as_bytes()).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    let _ = socket.shutdown().await;
}

/// Decode a chunked body, or `None` if it is still incomplete.
fn decode_chunked(data: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    let mut pos = 0;
    loop {
        let line_end = find_subslice(&data[pos..], b"\r\n")? + pos;
        let size_text = std::str::from_utf8(&data[pos..line_end]).ok()?;
        let size_text = size_text.split(';').next().unwrap_or("").trim();
        let size = usize::from_str_radix(size_text, 16).ok()?;
        pos = line_end + 2;
        if size == 0 {
            return Some(out);
        }
        if data.len() < pos + size + 2 {
            return None;
        }
        out.extend_from_slice(&data[pos..pos + size]);
        pos += size + 2;
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Reserve a local port, then release it, yielding an address nothing
/// listens on. Connections to it are refused.
pub fn unreachable_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}
