//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with one fixed status and body, and records the request
//! paths it saw.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// A running server. It lives until the process exits.
pub struct PageServer {
    /// Base URL without a trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PageServer {
    /// Request paths received so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serves `body` with `200 OK` to every GET.
pub fn start(body: &str) -> PageServer {
    start_with_status(200, "OK", body)
}

/// Serves `body` with the given status line to every GET.
pub fn start_with_status(code: u16, reason: &'static str, body: &str) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, code, reason, &body, &seen));
        }
    });
    PageServer {
        base: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// A local URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    code: u16,
    reason: &str,
    body: &str,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    seen.lock().unwrap().push(path.to_string());
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        code,
        reason,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}
