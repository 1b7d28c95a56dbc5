//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tokio::net::TcpListener;
use urlshort::config::ServerConfig;
use urlshort::lifecycle::Shutdown;
use urlshort::HttpServer;

/// Start a server on an ephemeral local port.
///
/// The returned [`Shutdown`] stops it; dropping it leaves it running until
/// the test runtime ends.
pub async fn start_server(server: HttpServer) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Write a redirect table into `dir` and point a default config at it.
#[allow(dead_code)]
pub fn config_with_table(dir: &tempfile::TempDir, name: &str, content: &str) -> ServerConfig {
    let path: PathBuf = dir.path().join(name);
    std::fs::write(&path, content).unwrap();

    let mut config = ServerConfig::default();
    config.mapping.path = path.display().to_string();
    config
}
