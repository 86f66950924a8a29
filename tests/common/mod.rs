//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use house_feed::config::ServerConfig;
use house_feed::http::HttpServer;
use house_feed::lifecycle::{bind_listener, Shutdown};
use tempfile::TempDir;

pub const TWO_HOUSES: &str = r#"[
    {"price": 100, "area": 50, "furnishingstatus": "Furnished"},
    {"price": 200, "area": 80, "furnishingstatus": "unfurnished"}
]"#;

/// A server running on an ephemeral port over files in a scratch directory.
pub struct TestServer {
    pub addr: SocketAddr,
    pub dir: TempDir,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    /// Replace the source document.
    pub fn write_input(&self, contents: &str) {
        std::fs::write(&self.input_path, contents).unwrap();
    }

    pub fn last_response(&self) -> String {
        std::fs::read_to_string(&self.output_path).unwrap()
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.handle.await.unwrap().unwrap();
    }
}

/// Config over `houses.json` and `last-response.xml` in `dir`.
pub fn config_in(dir: &TempDir) -> ServerConfig {
    ServerConfig::new(dir.path().join("houses.json"), "127.0.0.1", 0)
        .with_output_path(dir.path().join("last-response.xml"))
}

/// Start a server whose input file holds `contents`.
pub async fn start_server(contents: &str) -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    std::fs::write(&config.input_path, contents).unwrap();

    let input_path = config.input_path.clone();
    let output_path = config.output_path.clone();

    let listener = bind_listener(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(server.run(listener, shutdown.wait()));

    TestServer {
        addr,
        dir,
        input_path,
        output_path,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Text of every `<name>` element, in document order.
pub fn element_texts(xml: &str, name: &str) -> Vec<String> {
    let open = format!("<{name}>");
    let close = format!("</{name}>");
    xml.lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(open.as_str())?.strip_suffix(close.as_str()))
        .map(ToString::to_string)
        .collect()
}
