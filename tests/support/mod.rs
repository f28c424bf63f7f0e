// Shared helpers for integration tests
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use image_describer::config::OpenAiConfig;
use image_describer::DescriptionRequester;
use mockito::ServerGuard;

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub const APPLE_RESPONSE: &str =
    r#"{"choices":[{"message":{"content":"A red apple on a table."}}]}"#;

/// Smallest byte string that passes JPEG detection
pub const JPEG_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0\0\x10JFIF\0\x01\x01\0\0\x01\0\x01\0\0\xFF\xD9";

/// Start an async mockito server
pub async fn start() -> ServerGuard {
    mockito::Server::new_async().await
}

/// Requester pointed at the mock server's `/v1` prefix
pub fn requester_for(server: &ServerGuard) -> DescriptionRequester {
    requester_at(&format!("{}/v1", server.url()))
}

pub fn requester_at(base_url: &str) -> DescriptionRequester {
    let config = OpenAiConfig {
        api_base_url: base_url.to_string(),
        timeout_seconds: Some(10),
    };
    DescriptionRequester::new(&config).expect("requester should build")
}

/// Base URL for a port nothing listens on
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1", port)
}
