//! Mock server helpers for archive endpoint testing
//!
//! Provides utilities for setting up wiremock mock servers with the two
//! endpoint shapes dart-up consumes: the latest-version manifest and the
//! per-artifact archive downloads.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Mount the latest-version manifest endpoint for a channel
pub async fn mock_version_manifest(server: &MockServer, channel: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/channels/{}/release/latest/VERSION", channel)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a failing latest-version manifest endpoint
pub async fn mock_failing_version_manifest(server: &MockServer, channel: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/channels/{}/release/latest/VERSION", channel)))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

/// Mount one artifact archive endpoint within a release
///
/// `file` is the release-relative archive path, e.g.
/// `sdk/dartsdk-linux-x64-release.zip`.
pub async fn mock_archive(
    server: &MockServer,
    channel: &str,
    version: &str,
    file: &str,
    body: Vec<u8>,
) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/channels/{}/release/{}/{}",
            channel, version, file
        )))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Mount an artifact archive endpoint that always fails with 500
pub async fn mock_failing_archive(server: &MockServer, channel: &str, version: &str, file: &str) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/channels/{}/release/{}/{}",
            channel, version, file
        )))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

/// Number of archive (.zip) requests the server has received
pub async fn archive_request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request: &&Request| request.url.path().ends_with(".zip"))
        .count()
}
