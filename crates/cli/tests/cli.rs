//! End-to-end tests of the `jackett` binary against a stub server.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::Output;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tempfile::TempDir;
use tokio::process::Command;

const API_KEY: &str = "apikey";
const INDEXERS_XML: &str = include_str!("../../core/tests/fixtures/indexers.xml");
const SEARCH_ALL_XML: &str = include_str!("../../core/tests/fixtures/search_all.xml");

async fn torznab(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.get("apikey").map(String::as_str) != Some(API_KEY) {
        return (StatusCode::UNAUTHORIZED, "").into_response();
    }
    match (params.get("t").map(String::as_str), id.as_str()) {
        (Some("indexers"), "all") => INDEXERS_XML.into_response(),
        (Some("search"), "all") => SEARCH_ALL_XML.into_response(),
        _ => (StatusCode::BAD_REQUEST, "").into_response(),
    }
}

async fn start_stub() -> SocketAddr {
    let router = Router::new().route("/api/v2.0/indexers/{id}/results/torznab", get(torznab));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

fn write_config(dir: &TempDir, base_url: &str, api_key: &str) -> PathBuf {
    let path = dir.path().join("jackett.toml");
    std::fs::write(
        &path,
        format!(
            r#"
[connection]
base_url = "{}"
api_key = "{}"
"#,
            base_url, api_key
        ),
    )
    .unwrap();
    path
}

async fn jackett(config: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jackett"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("JACKETT_CONFIG")
        .output()
        .await
        .expect("Failed to run jackett binary")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_succeeds_against_running_server() {
    let addr = start_stub().await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &format!("http://{}/api/v2.0", addr), API_KEY);

    let output = jackett(&config, &["check"]).await;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("reachable"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_fails_when_server_is_down() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &format!("http://{}/api/v2.0", closed_addr()), API_KEY);

    let output = jackett(&config, &["check"]).await;
    assert!(!output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_indexers_json() {
    let addr = start_stub().await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &format!("http://{}/api/v2.0", addr), API_KEY);

    let output = jackett(&config, &["indexers", "--configured", "--json"]).await;
    assert!(output.status.success());

    let indexers: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = indexers.iter().filter_map(|i| i["id"].as_str()).collect();
    assert_eq!(ids, vec!["indexerId2", "indexerId3"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_filters_by_indexer() {
    let addr = start_stub().await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &format!("http://{}/api/v2.0", addr), API_KEY);

    let output = jackett(&config, &["search", "title", "--indexer", "indexer2"]).await;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("The title 2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_redacts_api_key() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "http://localhost:9117/api/v2.0", "super-secret");

    let output = jackett(&config, &["config"]).await;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("super-secret"));
    assert!(stdout.contains("\"api_key_configured\": true"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "ftp://localhost", API_KEY);

    let output = jackett(&config, &["check"]).await;
    assert!(!output.status.success());
}
