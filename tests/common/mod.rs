//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use quotecard::config::FetchConfig;
use quotecard::provider::build_client;
use reqwest::Client;
use std::net::TcpListener;

/// Find a port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// URL that refuses connections.
pub fn dead_url() -> String {
    format!("http://127.0.0.1:{}/v1/quotes", free_port())
}

/// HTTP client with short timeouts for tests.
pub fn test_client() -> Client {
    build_client(&FetchConfig {
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    })
    .expect("Failed to build client")
}
