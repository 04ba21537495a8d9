// Shared test helpers for mock lookup services.
//
// Each test gets one httptest server playing both services: the geolocation
// service under /json/ and the secondary service under /myip.

use httptest::{matchers::*, responders::*, Expectation, Server};

use public_ip_report::initialization::init_client;
use public_ip_report::{Config, Endpoints};

/// Endpoints pointing both services at `server`.
#[allow(dead_code)]
pub fn mock_endpoints(server: &Server) -> Endpoints {
    Endpoints {
        geo_url: server.url("/json/").to_string(),
        secondary_url: server.url("/myip").to_string(),
    }
}

/// Client built the same way the binary builds it.
pub fn test_client() -> reqwest::Client {
    init_client(&Config {
        timeout_seconds: 5,
        ..Default::default()
    })
    .expect("Failed to build HTTP client")
}

/// Expects exactly one geolocation self-lookup answered with `body`.
pub fn expect_self_lookup(server: &Server, body: &'static str) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/json/"))
            .respond_with(status_code(200).body(body)),
    );
}

/// Expects exactly one secondary lookup answered with `status` and `body`.
#[allow(dead_code)]
pub fn expect_secondary(server: &Server, status: u16, body: &'static str) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/myip"))
            .respond_with(status_code(status).body(body)),
    );
}

/// Expects exactly one geolocation lookup at `path` (`/json/<ip>`) answered with `body`.
#[allow(dead_code)] // Not every test file enriches
pub fn expect_ip_lookup(server: &Server, path: &'static str, body: &'static str) {
    server.expect(
        Expectation::matching(request::method_path("GET", path))
            .respond_with(status_code(200).body(body)),
    );
}

/// A URL on localhost where nothing listens.
#[allow(dead_code)] // Not every test file needs a dead endpoint
pub fn closed_port_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{}{}", addr, path)
}

/// A URL on localhost whose server announces a 100-byte body, sends a few
/// bytes of it and closes the connection.
#[allow(dead_code)] // Not every test file needs a truncated body
pub fn truncated_body_url(path: &str) -> String {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        // Read the whole request head before answering
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n9.9.9");
        let _ = stream.flush();
        let _ = stream.shutdown(std::net::Shutdown::Both);
    });
    format!("http://{}{}", addr, path)
}

pub const PRIMARY_GOOGLE: &str =
    r#"{"query":"8.8.8.8","isp":"Google","country":"USA","status":"success"}"#;
#[allow(dead_code)]
pub const ENRICHED_QUAD9: &str =
    r#"{"query":"9.9.9.9","isp":"Quad9","country":"USA","status":"success"}"#;
