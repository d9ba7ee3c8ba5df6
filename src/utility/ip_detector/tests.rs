// Standard library
use std::net::{IpAddr, Ipv4Addr};

// 3rd party crates
use httpmock::prelude::*;

// Current module imports
use super::errors::IpDetectionError;
use super::types::{IpDetection, IpDetector};

fn detector_for(services: Vec<String>) -> IpDetector {
    IpDetector::new(IpDetection {
        services,
        timeout: 2,
    })
    .expect("client should build")
}

#[tokio::test]
async fn first_valid_answer_wins() {
    let server = MockServer::start_async().await;
    let primary = server
        .mock_async(|when, then| {
            when.method(GET).path("/primary");
            then.status(200).body("203.0.113.7\n");
        })
        .await;
    let backup = server
        .mock_async(|when, then| {
            when.method(GET).path("/backup");
            then.status(200).body("198.51.100.1");
        })
        .await;

    let detector = detector_for(vec![server.url("/primary"), server.url("/backup")]);
    let ip = detector.detect_ip().await.expect("lookup should succeed");

    assert_eq!(ip, IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)));
    primary.assert_async().await;
    backup.assert_calls_async(0).await;
}

#[tokio::test]
async fn falls_back_past_broken_services() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/down");
            then.status(503);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/garbage");
            then.status(200).body("<html>not an ip</html>");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/good");
            then.status(200).body("198.51.100.1");
        })
        .await;

    let detector = detector_for(vec![
        server.url("/down"),
        server.url("/garbage"),
        server.url("/good"),
    ]);

    assert_eq!(
        detector.detect_ip().await.expect("fallback should succeed"),
        IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1))
    );
}

#[tokio::test]
async fn all_services_failing_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/down");
            then.status(500);
        })
        .await;

    let detector = detector_for(vec![server.url("/down")]);

    assert!(matches!(
        detector.detect_ip().await,
        Err(IpDetectionError::NoServicesAvailable)
    ));
}

#[test]
fn validation_rejects_empty_service_list() {
    let config = IpDetection {
        services: vec!["  ".to_string()],
        timeout: 5,
    };
    assert!(config.validate().is_err());
    assert!(IpDetection::default().validate().is_ok());
}
