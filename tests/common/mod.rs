//! Common test utilities for integration tests

use demo_image_fetcher::config::ResolvedConfig;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// URL on a local port nothing listens on, so the request fails to connect
#[allow(dead_code)]
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/photo-unreachable";

/// Config writing into a fresh nested directory under `tmp`
#[allow(dead_code)]
pub fn config_in(tmp: &TempDir) -> ResolvedConfig {
    ResolvedConfig {
        services_dir: tmp.path().join("assets/images/services"),
        ..ResolvedConfig::default()
    }
}

/// Mounts a GET handler for `route` that only matches the default query parameters
#[allow(dead_code)]
pub async fn mount_image(server: &MockServer, route: &str, status: u16, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("w", "800"))
        .and(query_param("q", "80"))
        .and(query_param("fm", "jpg"))
        .and(query_param("fit", "crop"))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body.to_vec()))
        .expect(1..)
        .mount(server)
        .await;
}

/// Sorted file names in `dir`
#[allow(dead_code)]
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Serves one request with a 200 that promises 1000 bytes, sends a few and hangs up.
///
/// Returns the URL to request. The listener runs on a plain thread so it does not
/// depend on the test runtime.
#[allow(dead_code)]
pub fn spawn_truncating_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\nonly a few bytes")
            .unwrap();
        stream.flush().unwrap();
    });
    format!("http://{addr}/photo-truncated")
}
