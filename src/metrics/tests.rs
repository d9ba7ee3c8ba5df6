// Standard library
use std::time::{Duration, UNIX_EPOCH};

// 3rd party crates
use httpmock::prelude::*;
use serde_json::json;

// Current module imports
use super::errors::MetricsError;
use super::reporter::{MetricsConfig, StatusPageReporter};
use super::traits::LatencySink;

fn config(base_url: &str) -> MetricsConfig {
    MetricsConfig {
        enabled: true,
        base_url: base_url.to_string(),
        page_id: "page42".to_string(),
        metric_id: "metric7".to_string(),
        api_key: "secret-key".to_string(),
        timestamp_offset: 300,
    }
}

#[test]
fn data_point_is_stamped_slightly_in_the_future() {
    let reporter = StatusPageReporter::new(&config("https://status.test"), Duration::from_secs(1))
        .expect("client should build");
    let now = UNIX_EPOCH + Duration::from_millis(1_700_000_000_500);

    assert_eq!(
        reporter.data_point(42.5, now),
        json!({"data": {"timestamp": 1_700_000_300.5, "value": 42.5}})
    );
    assert_eq!(
        reporter.url,
        "https://status.test/pages/page42/metrics/metric7/data.json"
    );
}

#[test]
fn enabled_metrics_need_ids_and_key() {
    let mut cfg = config("https://status.test");
    assert!(cfg.validate().is_ok());

    cfg.api_key.clear();
    assert!(cfg.validate().is_err());

    cfg.enabled = false;
    assert!(cfg.validate().is_ok());
    assert!(!format!("{:?}", config("x")).contains("secret-key"));
}

#[tokio::test]
async fn posts_latency_with_oauth_header() {
    let server = MockServer::start_async().await;
    let post = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/pages/page42/metrics/metric7/data.json")
                .header("authorization", "OAuth secret-key");
            then.status(201)
                .header("content-type", "application/json")
                .body(r#"{"data":{}}"#);
        })
        .await;

    let reporter = StatusPageReporter::new(&config(&server.base_url()), Duration::from_secs(2))
        .expect("client should build");
    reporter.record(12.0).await.expect("post should succeed");

    post.assert_async().await;
}

#[tokio::test]
async fn rejected_post_surfaces_the_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(401).body("unauthorized");
        })
        .await;

    let reporter = StatusPageReporter::new(&config(&server.base_url()), Duration::from_secs(2))
        .expect("client should build");

    assert!(matches!(
        reporter.record(12.0).await,
        Err(MetricsError::Rejected { status: 401, .. })
    ));
}
