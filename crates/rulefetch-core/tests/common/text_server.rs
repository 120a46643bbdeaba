//! Minimal HTTP/1.1 server for retrieval tests.
//!
//! Serves one configurable response per connection and records each raw
//! request head so tests can assert what actually went over the wire.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TextServerOptions {
    /// Status code of the response line.
    pub status: u32,
    /// `Content-Type` header value; None omits the header entirely.
    pub content_type: Option<String>,
    /// Response body, sent verbatim.
    pub body: String,
}

impl Default for TextServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: Some("text/plain".to_string()),
            body: String::new(),
        }
    }
}

/// Starts a server answering 200 `text/plain` with `body`. Returns the base
/// URL (e.g. "http://127.0.0.1:12345/"). The server runs until the process
/// exits.
pub fn start(body: &str) -> String {
    start_with_options(TextServerOptions {
        body: body.to_string(),
        ..Default::default()
    })
    .0
}

/// Like `start` but fully configurable. Also returns the captured request
/// heads, one entry per connection.
pub fn start_with_options(opts: TextServerOptions) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            let captured = Arc::clone(&captured);
            thread::spawn(move || handle(stream, &opts, &captured));
        }
    });
    (format!("http://127.0.0.1:{}/", port), requests)
}

fn handle(mut stream: TcpStream, opts: &TextServerOptions, captured: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    if let Ok(request) = std::str::from_utf8(&buf[..n]) {
        captured.lock().unwrap().push(request.to_string());
    }

    let reason = match opts.status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Other",
    };
    let content_type = match &opts.content_type {
        Some(ct) => format!("Content-Type: {}\r\n", ct),
        None => String::new(),
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\n{}\r\n",
        opts.status,
        reason,
        opts.body.len(),
        content_type
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(opts.body.as_bytes());
}
