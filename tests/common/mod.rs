//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use spacex_facade::config::AppConfig;
use spacex_facade::{HttpServer, Shutdown};

pub const ROCKETS: &str = r#"[
    {"id": "5e9d0d95eda69955f709d1eb", "name": "Falcon 1", "active": false, "success_rate_pct": 40, "country": "Republic of the Marshall Islands"},
    {"id": "5e9d0d95eda69973a809d1ec", "name": "Falcon 9", "active": true, "success_rate_pct": 97, "stages": 2},
    {"id": "5e9d0d95eda69974db09d1ed", "name": "Falcon Heavy", "active": true, "success_rate_pct": null},
    {"id": "5e9d0d96eda699382d09d1ee", "name": "Starship", "success_rate_pct": 10}
]"#;

pub const LAUNCHES: &str = r#"[
    {"id": "5eb87cd9ffd86e000604b32a", "name": "FalconSat", "rocket": "5e9d0d95eda69955f709d1eb", "date_unix": 1143239400},
    {"id": "5eb87cdaffd86e000604b32b", "name": "DemoSat", "rocket": "5e9d0d95eda69955f709d1eb", "date_unix": 1174439400},
    {"id": "5eb87cdbffd86e000604b32c", "name": "CRS-1", "rocket": "5e9d0d95eda69973a809d1ec", "date_unix": 1704484800, "flight_number": 3},
    {"id": "5eb87cdcffd86e000604b32d", "name": "Starlink 1", "rocket": "5e9d0d95eda69973a809d1ec"}
]"#;

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}

/// Start a mock upstream that answers each request path via `route`.
///
/// Returns the bound address and the list of paths requested so far.
pub async fn start_mock_upstream<F>(route: F) -> (SocketAddr, Arc<Mutex<Vec<String>>>)
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let route = Arc::new(route);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_task = seen.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let route = route.clone();
                    let seen = seen_task.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let mut read = 0;
                        while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                            match socket.read(&mut buf[read..]).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => read += n,
                            }
                        }

                        let head = String::from_utf8_lossy(&buf[..read]);
                        let path = head
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();
                        seen.lock().unwrap().push(path.clone());

                        let (status, body) = route(&path);
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, seen)
}

/// Upstream serving the canned rocket and launch catalogues.
pub async fn start_spacex_upstream() -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    start_mock_upstream(|path| match path {
        "/v4/rockets" => (200, ROCKETS.to_string()),
        "/v4/launches" => (200, LAUNCHES.to_string()),
        _ => (404, "Not Found".to_string()),
    })
    .await
}

/// Config pointing at `upstream`.
pub fn config_for(upstream: SocketAddr) -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.base_url = format!("http://{}", upstream);
    config.upstream.timeout_secs = 5;
    config
}

/// Start the facade on an ephemeral port.
pub async fn start_facade(config: AppConfig, shutdown: &Shutdown) -> (String, tokio::task::JoinHandle<()>) {
    let server = HttpServer::new(config).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let rx = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://{}", addr), handle)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
