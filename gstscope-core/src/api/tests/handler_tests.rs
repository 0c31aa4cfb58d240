use crate::api::types::{ErrorBody, FilterOptions, LogsResponse, TimelineResponse, UploadResponse};
use crate::api::{ApiHandler, ApiLimits, ApiRequest, ApiResponse};
use crate::session::SessionId;
use crate::test_support::{SAMPLE_LOG, pipeline, ready_pipeline};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use std::time::Duration;

fn handler() -> (ApiHandler, SessionId) {
    let (pipeline, id) = ready_pipeline();
    (ApiHandler::new(pipeline, ApiLimits::default()), id)
}

fn body<T: DeserializeOwned>(resp: &ApiResponse) -> T {
    serde_json::from_slice(&resp.body).unwrap()
}

fn get(handler: &ApiHandler, path: &str, query: &str) -> ApiResponse {
    handler.handle(ApiRequest::get(path, Some(query)))
}

#[tokio::test]
async fn upload_then_options_become_available() {
    // Arrange
    let handler = ApiHandler::new(pipeline(), ApiLimits::default());

    // Act
    let resp = handler.handle(ApiRequest::post("/api/upload", SAMPLE_LOG));
    let upload: UploadResponse = body(&resp);
    let query = format!("session_id={}", upload.session_id);

    let mut options = get(&handler, "/api/filter-options", &query);
    for _ in 0..50 {
        if options.status != StatusCode::NOT_FOUND {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        options = get(&handler, "/api/filter-options", &query);
    }

    // Assert
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(options.status, StatusCode::OK);
    let options: FilterOptions = body(&options);
    assert_eq!(options.pids, vec![100, 200]);
}

#[tokio::test]
async fn empty_upload_is_rejected() {
    let handler = ApiHandler::new(pipeline(), ApiLimits::default());

    let resp = handler.handle(ApiRequest::post("/api/upload", ""));

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let limits = ApiLimits {
        max_upload_bytes: 16,
        ..Default::default()
    };
    let handler = ApiHandler::new(pipeline(), limits);

    let resp = handler.handle(ApiRequest::post("/api/upload", SAMPLE_LOG));

    assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[test]
fn logs_are_filtered_and_paginated() {
    let (handler, id) = handler();

    let resp = get(
        &handler,
        "/api/logs",
        &format!("session_id={id}&level=INFO&per_page=2&page=2"),
    );

    assert_eq!(resp.status, StatusCode::OK);
    let logs: LogsResponse = body(&resp);
    assert_eq!(logs.total, 3);
    assert_eq!(logs.total_pages, 2);
    assert_eq!(logs.page, 2);
    assert_eq!(logs.entries.len(), 1);
    assert_eq!(logs.entries[0].ts, "0:00:02.000500000");
    assert_eq!(logs.entries[0].category.as_deref(), Some("queue"));
}

#[test]
fn categories_are_ored() {
    let (handler, id) = handler();

    let resp = get(
        &handler,
        "/api/logs",
        &format!("session_id={id}&categories=GST_PADS&categories=basesrc"),
    );

    let logs: LogsResponse = body(&resp);
    assert_eq!(logs.total, 3);
}

#[test]
fn per_page_above_maximum_is_rejected() {
    let (handler, id) = handler();

    let resp = get(&handler, "/api/logs", &format!("session_id={id}&per_page=1001"));

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[test]
fn invalid_regex_is_a_bad_request() {
    let (handler, id) = handler();

    let resp = get(
        &handler,
        "/api/logs",
        &format!("session_id={id}&function_regex=%28unclosed"),
    );

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    let err: ErrorBody = body(&resp);
    assert!(err.error.contains("function_regex"), "{}", err.error);

    let retry = get(&handler, "/api/logs", &format!("session_id={id}"));
    assert_eq!(retry.status, StatusCode::OK);
    let logs: LogsResponse = body(&retry);
    assert_eq!(logs.total, 6);
}

#[test]
fn unknown_session_is_not_found() {
    let (handler, _) = handler();

    let resp = get(&handler, "/api/logs", "session_id=does-not-exist");

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[test]
fn failed_session_is_unprocessable() {
    let pipeline = pipeline();
    let id = pipeline.store().create();
    pipeline.ingest(&id, b"garbage\n").unwrap();
    let handler = ApiHandler::new(pipeline, ApiLimits::default());

    let resp = get(&handler, "/api/filter-options", &format!("session_id={id}"));

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: ErrorBody = body(&resp);
    assert_eq!(err.state.as_deref(), Some("failed"));
}

#[test]
fn timeline_renders_in_interval_unit() {
    let (handler, id) = handler();

    let resp = get(
        &handler,
        "/api/timeline",
        &format!("session_id={id}&interval=500us&max_timestamp=1000&use_microseconds=true"),
    );

    assert_eq!(resp.status, StatusCode::OK);
    let timeline: TimelineResponse = body(&resp);
    assert_eq!(timeline.unit, "us");
    assert!(timeline.use_microseconds);
    assert_eq!(timeline.min_timestamp, 100);
    assert_eq!(timeline.max_timestamp, 900);
    let buckets: Vec<(u64, usize)> = timeline
        .buckets
        .iter()
        .map(|b| (b.timestamp, b.count))
        .collect();
    assert_eq!(buckets, vec![(0, 2), (500, 1)]);
}

#[test]
fn timeline_total_matches_logs_total() {
    let (handler, id) = handler();
    let filter = format!("session_id={id}&pid=100");

    let logs: LogsResponse = body(&get(&handler, "/api/logs", &filter));
    for interval in ["100us", "1ms", "1s", "5m"] {
        let timeline: TimelineResponse = body(&get(
            &handler,
            "/api/timeline",
            &format!("{filter}&interval={interval}"),
        ));
        let sum: usize = timeline.buckets.iter().map(|b| b.count).sum();
        assert_eq!(sum, logs.total, "{interval}");
    }
}

#[test]
fn timeline_default_interval_is_one_second() {
    let (handler, id) = handler();

    let timeline: TimelineResponse = body(&get(&handler, "/api/timeline", &format!("session_id={id}")));

    assert_eq!(timeline.interval, "1s");
    assert_eq!(timeline.unit, "ms");
    let buckets: Vec<u64> = timeline.buckets.iter().map(|b| b.timestamp).collect();
    assert_eq!(buckets, vec![0, 1000, 2000]);
}

#[test]
fn unknown_interval_is_rejected() {
    let (handler, id) = handler();

    let resp = get(&handler, "/api/timeline", &format!("session_id={id}&interval=2h"));

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[test]
fn routing_errors() {
    let (handler, _) = handler();

    let missing = handler.handle(ApiRequest::get("/api/nope", None));
    let wrong_method = handler.handle(ApiRequest::post("/api/logs", "x"));

    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(wrong_method.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(wrong_method.allow, Some(Method::GET));
}

#[test]
fn health_counts_sessions() {
    let (handler, _) = handler();

    let resp = handler.handle(ApiRequest::get("/api/health", None));

    assert_eq!(resp.status, StatusCode::OK);
    let json: serde_json::Value = body(&resp);
    assert_eq!(json["sessions"], 1);
}

#[test]
fn preflight_on_known_endpoint_allows_any_origin() {
    // Arrange
    let (handler, _) = handler();
    let req = ApiRequest {
        method: Method::OPTIONS,
        ..ApiRequest::get("/api/logs", None)
    };

    // Act
    let resp = handler.handle(req);
    let headers = resp.headers();
    let header_value = |name: http::HeaderName| {
        headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    };

    // Assert
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert!(resp.body.is_empty());
    assert_eq!(header_value(http::header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
    assert_eq!(
        header_value(http::header::ACCESS_CONTROL_ALLOW_METHODS),
        Some("GET, OPTIONS")
    );
}

#[test]
fn preflight_on_unknown_path_is_not_found() {
    let (handler, _) = handler();
    let req = ApiRequest {
        method: Method::OPTIONS,
        ..ApiRequest::get("/api/nope", None)
    };

    let resp = handler.handle(req);

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[test]
fn every_response_carries_allow_origin() {
    let (handler, id) = handler();

    let ok = get(&handler, "/api/logs", &format!("session_id={id}"));
    let missing = get(&handler, "/api/logs", "session_id=does-not-exist");

    for resp in [ok, missing] {
        assert!(
            resp.headers()
                .iter()
                .any(|(n, v)| *n == http::header::ACCESS_CONTROL_ALLOW_ORIGIN && v == "*")
        );
        assert!(!resp.headers().iter().any(|(n, _)| *n == http::header::ACCESS_CONTROL_ALLOW_METHODS));
    }
}
