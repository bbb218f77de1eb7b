//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and run full
//! harvests end-to-end into temporary output directories.

use site_harvester::config::Config;
use site_harvester::crawler::{run_crawl, SiteCrawler};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(domain: &str, output_dir: &Path) -> Config {
    let mut config = Config::for_domain(domain);
    config.harvest.scheme = "http".to_string();
    config.harvest.output_dir = output_dir.to_path_buf();
    config.http.timeout_secs = 5;
    config
}

/// Extracts "127.0.0.1:PORT" from the mock server URI
fn domain_of(server: &MockServer) -> String {
    url::Url::parse(&server.uri())
        .ok()
        .and_then(|u| Some(format!("{}:{}", u.host_str()?, u.port()?)))
        .expect("Failed to extract host from mock server URI")
}

async fn mount_html(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_bytes(server: &MockServer, route: &str, bytes: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.to_vec()))
        .mount(server)
        .await;
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read output directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_work_list_is_root_plus_same_domain_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let domain = domain_of(&mock_server);

    mount_html(
        &mock_server,
        "/",
        format!(
            r#"<html><body>
            <a href="{base_url}/about">About</a>
            <a href="https://other.com/x">Elsewhere</a>
            </body></html>"#
        ),
    )
    .await;

    let output = TempDir::new().unwrap();
    let crawler = SiteCrawler::from_config(&create_test_config(&domain, output.path()))
        .await
        .expect("Failed to create crawler");

    let work = crawler.discover(&domain).await.unwrap();
    assert_eq!(work, vec![base_url.clone(), format!("{base_url}/about")]);
}

#[tokio::test]
async fn test_full_harvest_root_and_subpages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let domain = domain_of(&mock_server);

    mount_html(
        &mock_server,
        "/",
        format!(
            r#"<html><body>
            <a href="{base_url}/gallery">Gallery</a>
            <a href="https://other.com/x">Elsewhere</a>
            <img src="{base_url}/img/a.png">
            </body></html>"#
        ),
    )
    .await;
    mount_html(
        &mock_server,
        "/gallery",
        format!(
            r#"<html><body>
            <img src="{base_url}/img/b.jpg">
            <img alt="no source">
            </body></html>"#
        ),
    )
    .await;
    mount_bytes(&mock_server, "/img/a.png", b"png-a").await;
    mount_bytes(&mock_server, "/img/b.jpg", b"jpg-b").await;

    let output = TempDir::new().unwrap();
    let report = run_crawl(create_test_config(&domain, output.path()))
        .await
        .expect("Harvest failed");

    assert_eq!(report.pages_scheduled, 2);
    assert_eq!(report.subpages_discovered, 1);
    assert_eq!(report.pages_fetched, 2);
    assert_eq!(report.images_saved, 2);

    assert_eq!(files_in(output.path()), vec!["a.png", "b.jpg"]);
    assert_eq!(std::fs::read(output.path().join("a.png")).unwrap(), b"png-a");
    assert_eq!(std::fs::read(output.path().join("b.jpg")).unwrap(), b"jpg-b");
}

#[tokio::test]
async fn test_missing_image_does_not_block_others() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let domain = domain_of(&mock_server);

    mount_html(
        &mock_server,
        "/",
        format!(
            r#"<html><body>
            <img src="{base_url}/img/missing.png">
            <img src="{base_url}/img/present.png">
            </body></html>"#
        ),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/img/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    mount_bytes(&mock_server, "/img/present.png", b"here").await;

    let output = TempDir::new().unwrap();
    let report = run_crawl(create_test_config(&domain, output.path()))
        .await
        .expect("Harvest failed");

    assert_eq!(report.images_found, 2);
    assert_eq!(report.images_failed, 1);
    assert_eq!(report.images_saved, 1);
    assert_eq!(files_in(output.path()), vec!["present.png"]);
}

#[tokio::test]
async fn test_colliding_names_last_write_wins() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let domain = domain_of(&mock_server);

    mount_html(
        &mock_server,
        "/",
        format!(
            r#"<html><body>
            <a href="{base_url}/a">A</a>
            <a href="{base_url}/b">B</a>
            </body></html>"#
        ),
    )
    .await;
    mount_html(
        &mock_server,
        "/a",
        format!(r#"<img src="{base_url}/a-assets/logo.png">"#),
    )
    .await;
    mount_html(
        &mock_server,
        "/b",
        format!(r#"<img src="{base_url}/b-assets/logo.png">"#),
    )
    .await;
    mount_bytes(&mock_server, "/a-assets/logo.png", b"logo-from-a").await;
    mount_bytes(&mock_server, "/b-assets/logo.png", b"logo-from-b").await;

    let output = TempDir::new().unwrap();
    let report = run_crawl(create_test_config(&domain, output.path()))
        .await
        .expect("Harvest failed");

    assert_eq!(report.images_saved, 2);
    assert_eq!(files_in(output.path()), vec!["logo.png"]);

    let contents = std::fs::read(output.path().join("logo.png")).unwrap();
    assert!(
        contents == b"logo-from-a" || contents == b"logo-from-b",
        "unexpected contents: {:?}",
        contents
    );
}

#[tokio::test]
async fn test_failed_root_still_completes() {
    let mock_server = MockServer::start().await;
    let domain = domain_of(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let output = TempDir::new().unwrap();
    let report = run_crawl(create_test_config(&domain, output.path()))
        .await
        .expect("Harvest should complete despite root failure");

    assert_eq!(report.pages_scheduled, 1);
    assert_eq!(report.subpages_discovered, 0);
    assert_eq!(report.pages_failed, 1);
    assert!(files_in(output.path()).is_empty());
}

#[tokio::test]
async fn test_failed_subpage_does_not_affect_siblings() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let domain = domain_of(&mock_server);

    mount_html(
        &mock_server,
        "/",
        format!(
            r#"<a href="{base_url}/broken">Broken</a>
               <a href="{base_url}/ok">Ok</a>"#
        ),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    mount_html(
        &mock_server,
        "/ok",
        format!(r#"<img src="{base_url}/photo.jpg">"#),
    )
    .await;
    mount_bytes(&mock_server, "/photo.jpg", b"photo").await;

    let output = TempDir::new().unwrap();
    let report = run_crawl(create_test_config(&domain, output.path()))
        .await
        .expect("Harvest failed");

    assert_eq!(report.pages_scheduled, 3);
    assert_eq!(report.pages_fetched, 2);
    assert_eq!(report.pages_failed, 1);
    assert_eq!(files_in(output.path()), vec!["photo.jpg"]);
}

#[tokio::test]
async fn test_bounded_concurrency_scrapes_every_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let domain = domain_of(&mock_server);

    let links: String = (1..=5)
        .map(|i| format!(r#"<a href="{base_url}/p{i}">P{i}</a>"#))
        .collect();
    mount_html(&mock_server, "/", links).await;
    for i in 1..=5 {
        mount_html(
            &mock_server,
            &format!("/p{i}"),
            format!(r#"<img src="{base_url}/img/{i}.png">"#),
        )
        .await;
        mount_bytes(&mock_server, &format!("/img/{i}.png"), b"img").await;
    }

    let output = TempDir::new().unwrap();
    let mut config = create_test_config(&domain, output.path());
    config.harvest.max_concurrent_pages = Some(2);

    let report = run_crawl(config).await.expect("Harvest failed");

    assert_eq!(report.pages_scheduled, 6);
    assert_eq!(report.pages_fetched, 6);
    assert_eq!(report.images_saved, 5);
    assert_eq!(
        files_in(output.path()),
        vec!["1.png", "2.png", "3.png", "4.png", "5.png"]
    );
}

#[tokio::test]
async fn test_output_directory_created() {
    let mock_server = MockServer::start().await;
    let domain = domain_of(&mock_server);
    mount_html(&mock_server, "/", "<html></html>".to_string()).await;

    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("deep").join("images");
    run_crawl(create_test_config(&domain, &nested))
        .await
        .expect("Harvest failed");

    assert!(nested.is_dir());
}
