//! Integration tests for the island scraper
//!
//! These tests use wiremock to stand in for the yoweb server and run the
//! whole fetch, extract, write cycle.

use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yoweb_islands::config::Config;
use yoweb_islands::output::read_records;
use yoweb_islands::scrape::{island_info_url, run, ISLAND_INFO_PATH};
use yoweb_islands::{IslandError, IslandRecord, Link};

const ISLAND_PAGE: &str = r#"<html>
<head><title>Islands</title></head>
<body>
<center>
  <center><font size="+2">Islands of the Cerulean Ocean</font></center>
  <center>
    <font size="+1">Bejeweled</font><br>
    Population: 1,024<br>
    Governor: <a href="/yoweb/pirate.wm?name=Jack">Jack</a><br>
    Property tax: 5%<br>
  </center>
  <a href="/yoweb/flag.wm?id=1">Crimson Tide</a>
  <center>
    <font size="+1">Emerald</font><br>
  </center>
</center>
</body>
</html>"#;

/// Creates a test configuration pointing at the mock server
fn create_test_config(server: &MockServer, output: &Path) -> Config {
    let mut config = Config::default();
    config.source.url = Some(format!(
        "{}/yoweb/island/info.wm?showAll=true",
        server.uri()
    ));
    config.source.timeout_secs = 5;
    config.output.path = output.display().to_string();
    config
}

fn expected_records() -> Vec<IslandRecord> {
    vec![
        IslandRecord::new(
            "Bejeweled",
            Some(1024),
            Some(Link::new("Jack", "/yoweb/pirate.wm?name=Jack")),
            Some("5%".to_string()),
            Some(Link::new("Crimson Tide", "/yoweb/flag.wm?id=1")),
        ),
        IslandRecord::new("Emerald", None, None, None, None),
    ]
}

#[tokio::test]
async fn test_full_scrape_writes_islands_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/yoweb/island/info.wm"))
        .and(query_param("showAll", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ISLAND_PAGE)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("islands.json");
    let config = create_test_config(&mock_server, &output);

    let islands = run(&config, None).await.expect("Scrape failed");
    assert_eq!(islands, expected_records());

    // Reading the file back gives the same records in the same order
    let written = read_records(&output).expect("Failed to read output");
    assert_eq!(written, islands);

    let raw = std::fs::read_to_string(&output).unwrap();
    assert!(raw.starts_with("[\n    {\n        \"name\": \"Bejeweled\","));
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(wiremock::matchers::header(
            "user-agent",
            concat!("yoweb-islands/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(ISLAND_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("islands.json");
    let config = create_test_config(&mock_server, &output);

    run(&config, None).await.expect("Scrape failed");
}

#[tokio::test]
async fn test_http_error_is_fatal_and_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("islands.json");
    let config = create_test_config(&mock_server, &output);

    let result = run(&config, None).await;

    assert!(matches!(
        result,
        Err(IslandError::HttpStatus { status: 500, .. })
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_not_found_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("islands.json");
    let config = create_test_config(&mock_server, &output);

    let result = run(&config, None).await;
    assert!(matches!(
        result,
        Err(IslandError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_missing_container_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>Down for maintenance</p></body></html>"),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("islands.json");
    let config = create_test_config(&mock_server, &output);

    let result = run(&config, None).await;

    assert!(matches!(result, Err(IslandError::ContainerNotFound)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_connection_failure_is_fetch_error() {
    // Bind and drop a listener so nothing answers on the port
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("islands.json");
    let mut config = Config::default();
    config.source.url = Some(format!("http://{}{}", addr, ISLAND_INFO_PATH));
    config.source.timeout_secs = 2;
    config.output.path = output.display().to_string();

    let result = run(&config, None).await;

    assert!(matches!(result, Err(IslandError::Fetch { .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_offline_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("info.html");
    let output = dir.path().join("islands.json");
    std::fs::write(&input, ISLAND_PAGE).unwrap();

    let mut config = Config::default();
    config.output.path = output.display().to_string();

    let islands = run(&config, Some(&input)).await.expect("Offline run failed");

    assert_eq!(islands, expected_records());
    assert_eq!(read_records(&output).unwrap(), islands);
}

#[tokio::test]
async fn test_offline_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.output.path = dir.path().join("islands.json").display().to_string();

    let result = run(&config, Some(&dir.path().join("missing.html"))).await;
    assert!(matches!(result, Err(IslandError::Read { .. })));
}

#[test]
fn test_default_url_uses_island_info_path() {
    let url = island_info_url(&Config::default().source).unwrap();
    assert!(url.as_str().ends_with(ISLAND_INFO_PATH));
}
