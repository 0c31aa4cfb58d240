use gstscope_core::client::{LogQuery, TimelineQuery};
use gstscope_core::record::Level;
use gstscope_core::timeline::Interval;
use integration_tests::harness::TestServer;
use pretty_assertions::assert_eq;

#[test]
fn one_second_buckets() {
    // Arrange
    let server = TestServer::start("basic");
    let id = server.ready_session("sample.log");

    // Act
    let timeline = server
        .api()
        .timeline(&id, &TimelineQuery::default())
        .unwrap();

    // Assert
    assert_eq!(timeline.interval, "1s");
    assert_eq!(timeline.unit, "ms");
    let buckets: Vec<(u64, usize)> = timeline
        .buckets
        .iter()
        .map(|b| (b.timestamp, b.count))
        .collect();
    assert_eq!(
        buckets,
        vec![(0, 7), (1000, 2), (2000, 1), (3000, 1), (6000, 1), (65000, 1)]
    );
    assert_eq!(timeline.min_timestamp, 0);
    assert_eq!(timeline.max_timestamp, 65000);
}

#[test]
fn bucket_counts_sum_to_the_listing_total() {
    let server = TestServer::start("basic");
    let id = server.ready_session("sample.log");
    let api = server.api();
    let filters = [
        LogQuery::default(),
        LogQuery {
            level: Some(Level::Debug),
            ..Default::default()
        },
        LogQuery {
            categories: vec!["GST_PADS".into(), "GST_STATES".into()],
            pid: Some(1234),
            ..Default::default()
        },
    ];

    for filter in filters {
        let total = api.logs(&id, &filter).unwrap().total;
        for interval in Interval::ALL {
            let timeline = api
                .timeline(
                    &id,
                    &TimelineQuery {
                        filter: filter.clone(),
                        interval: Some(interval),
                    },
                )
                .unwrap();
            let sum: usize = timeline.buckets.iter().map(|b| b.count).sum();
            assert_eq!(sum, total, "{interval} {filter:?}");
        }
    }
}

#[test]
fn sub_millisecond_interval_reports_microseconds() {
    let server = TestServer::start("basic");
    let id = server.ready_session("sample.log");

    let timeline = server
        .api()
        .timeline(
            &id,
            &TimelineQuery {
                filter: LogQuery {
                    max_timestamp: Some(1),
                    ..Default::default()
                },
                interval: Some(Interval::Us500),
            },
        )
        .unwrap();

    assert_eq!(timeline.unit, "us");
    assert!(timeline.use_microseconds);
    let buckets: Vec<(u64, usize)> = timeline
        .buckets
        .iter()
        .map(|b| (b.timestamp, b.count))
        .collect();
    // max_timestamp=1 is in milliseconds, so 1.2ms is still included.
    assert_eq!(buckets, vec![(0, 2), (1000, 1)]);
    assert_eq!(timeline.min_timestamp, 100);
    assert_eq!(timeline.max_timestamp, 1200);
}

#[test]
fn brushed_window_round_trips_into_the_listing() {
    let server = TestServer::start("basic");
    let id = server.ready_session("sample.log");
    let api = server.api();

    let timeline = api
        .timeline(
            &id,
            &TimelineQuery {
                interval: Some(Interval::Us250),
                ..Default::default()
            },
        )
        .unwrap();
    // Select the second bucket.
    let bucket = timeline.buckets[1];
    let width = 250;

    let logs = api
        .logs(
            &id,
            &LogQuery {
                min_timestamp: Some(bucket.timestamp),
                max_timestamp: Some(bucket.timestamp + width - 1),
                use_microseconds: timeline.use_microseconds,
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(logs.total, bucket.count);
}

#[test]
fn configured_default_interval_applies() {
    let server = TestServer::start("small_pages");
    let id = server.ready_session("sample.log");

    let timeline = server
        .api()
        .timeline(&id, &TimelineQuery::default())
        .unwrap();

    assert_eq!(timeline.interval, "1m");
    let buckets: Vec<(u64, usize)> = timeline
        .buckets
        .iter()
        .map(|b| (b.timestamp, b.count))
        .collect();
    assert_eq!(buckets, vec![(0, 12), (60000, 1)]);
}

#[test]
fn unknown_interval_is_a_bad_request() {
    let server = TestServer::start("basic");
    let id = server.ready_session("sample.log");

    let res = server
        .get(&format!("/api/timeline?session_id={id}&interval=2h"))
        .send()
        .unwrap();

    assert_eq!(res.status(), 400);
}
