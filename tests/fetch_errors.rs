//! Fetch failure tests.
//!
//! Each failure mode must surface as its own `FetchError` variant, with no
//! partial report. All servers are local; "unreachable" uses a port that was
//! bound and released, or a listener whose accept queue is already full.

mod helpers;

use std::net::TcpListener;
use std::time::{Duration, Instant};

use httptest::{matchers::*, responders::*, Expectation, Server};
use tokio::net::{TcpSocket, TcpStream};
use seo_audit::{analyze_page, run_analysis, FetchError, FetchErrorKind};

use helpers::{test_client, test_config, WELL_TAGGED_PAGE};

const TIMEOUT: Duration = Duration::from_secs(1);

#[tokio::test]
async fn test_404_is_http_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .respond_with(status_code(404).body(WELL_TAGGED_PAGE)),
    );

    let url = format!("http://{}/missing", server.addr());
    let err = analyze_page(&test_client(TIMEOUT), &url, TIMEOUT)
        .await
        .unwrap_err();
    // A 404 body is never analyzed, even when it is a full HTML page
    assert_eq!(err, FetchError::HttpError { status: 404 });
    assert!(err.user_message().contains("404"));
}

#[tokio::test]
async fn test_500_is_http_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(500)),
    );

    let url = format!("http://{}/", server.addr());
    let err = analyze_page(&test_client(TIMEOUT), &url, TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::HttpError { status: 500 });
}

#[tokio::test]
async fn test_slow_server_is_timeout() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/slow")).respond_with(
            delay_and_then(Duration::from_secs(5), status_code(200).body(WELL_TAGGED_PAGE)),
        ),
    );

    let url = format!("http://{}/slow", server.addr());
    let started = Instant::now();
    let err = analyze_page(&test_client(TIMEOUT), &url, TIMEOUT)
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Timeout { seconds: 1 });
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{addr}/");
    let err = analyze_page(&test_client(TIMEOUT), &url, TIMEOUT)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FetchErrorKind::NetworkError);
    match err {
        FetchError::NetworkError { cause } => assert!(!cause.is_empty()),
        other => panic!("expected NetworkError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unanswered_connect_is_network_error() {
    // A listener with a full accept queue never completes new handshakes
    let socket = TcpSocket::new_v4().unwrap();
    socket.bind("127.0.0.1:0".parse().unwrap()).unwrap();
    let listener = socket.listen(0).unwrap();
    let addr = listener.local_addr().unwrap();

    let mut backlog = Vec::new();
    for _ in 0..16 {
        match tokio::time::timeout(Duration::from_millis(200), TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => backlog.push(stream),
            _ => break,
        }
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    let url = format!("http://{addr}/");
    let started = Instant::now();
    let err = analyze_page(&client, &url, Duration::from_secs(10))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FetchErrorKind::NetworkError, "{err:?}");
    assert!(started.elapsed() < Duration::from_secs(5));
    drop(listener);
}

#[tokio::test]
async fn test_sub_second_timeout_reports_one_second() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/slow")).respond_with(
            delay_and_then(Duration::from_secs(3), status_code(200).body(WELL_TAGGED_PAGE)),
        ),
    );

    let timeout = Duration::from_millis(300);
    let url = format!("http://{}/slow", server.addr());
    let err = analyze_page(&test_client(Duration::from_secs(10)), &url, timeout)
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Timeout { seconds: 1 });
    assert!(err.user_message().contains("more than 1 second)"));
}

#[tokio::test]
async fn test_redirect_loop_is_network_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/loop"))
            .times(1..)
            .respond_with(status_code(302).append_header("Location", "/loop")),
    );

    let url = format!("http://{}/loop", server.addr());
    let err = run_analysis(&test_config(url)).await.unwrap_err();
    let fetch_error = err
        .downcast_ref::<FetchError>()
        .expect("fetch errors keep their type");
    assert_eq!(fetch_error.kind(), FetchErrorKind::NetworkError);
}

#[tokio::test]
async fn test_invalid_url_sends_no_request() {
    // No expectations: any request would fail the server's verification on drop
    let server = Server::run();
    let url = format!("{}/no-scheme", server.addr());

    let err = analyze_page(&test_client(TIMEOUT), &url, TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::InvalidUrl);
}

#[tokio::test]
async fn test_unsupported_scheme_is_invalid_url() {
    let err = analyze_page(&test_client(TIMEOUT), "ftp://example.com/", TIMEOUT)
        .await
        .unwrap_err();
    match err {
        FetchError::InvalidUrl { reason, .. } => assert!(reason.contains("ftp")),
        other => panic!("expected InvalidUrl, got {other:?}"),
    }
}

#[tokio::test]
async fn test_run_analysis_rejects_invalid_config() {
    let mut config = test_config("https://example.com/".to_string());
    config.timeout_seconds = 0;
    let err = run_analysis(&config).await.unwrap_err();
    assert!(err.downcast_ref::<FetchError>().is_none());
    assert!(err.to_string().contains("timeout_seconds"));
}
