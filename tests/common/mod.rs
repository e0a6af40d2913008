//! Shared utilities for integration tests.

use std::net::SocketAddr;

use axum::body::Bytes;
use outgoing::config::{GatewayConfig, SecretKey};
use outgoing::http::HttpServer;
use outgoing::lifecycle::Shutdown;
use tokio::net::TcpListener;

pub const SECRET: &str = "secret";
pub const VERSION: &str = r#"{"source":"https://github.com/example/outgoing","version":"0.1.0"}"#;

/// A gateway running on an ephemeral local port.
pub struct TestGateway {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestGateway {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a gateway signing with [`SECRET`].
pub async fn start_gateway() -> TestGateway {
    let mut config = GatewayConfig::default();
    config.signing.secret_key = SecretKey::new(SECRET);
    config.listener.bind_address = "127.0.0.1:0".into();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, Bytes::from_static(VERSION.as_bytes()));
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestGateway { addr, shutdown, handle }
}

/// HTTP client that never reuses connections or goes through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
