use super::fixtures::{mixed_dataset, record};
use crate::filter::{CompiledFilter, FilterSpec};
use crate::query::{PageRequest, count, distinct_values, list, matching};
use crate::record::{Level, Record};
use crate::session::Dataset;
use pretty_assertions::assert_eq;

fn info_filter() -> CompiledFilter {
    FilterSpec {
        level: Some(Level::Info),
        ..Default::default()
    }
    .compile()
    .unwrap()
}

#[test]
fn list_returns_matching_records_in_order() {
    // Arrange
    let dataset = Dataset::new(vec![
        record(100, Level::Info),
        record(150, Level::Error),
        record(900, Level::Info),
    ]);

    // Act
    let page = list(&dataset, &info_filter(), PageRequest::new(1, 10).unwrap());

    // Assert
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    let micros: Vec<u64> = page
        .entries
        .iter()
        .map(|r| r.timestamp.as_nanos() / 1_000)
        .collect();
    assert_eq!(micros, vec![100, 900]);
}

#[test]
fn page_past_the_end_is_empty() {
    let dataset = Dataset::new((0..40).map(|i| record(i, Level::Info)).collect());

    let page = list(
        &dataset,
        &CompiledFilter::match_all(),
        PageRequest::new(3, 50).unwrap(),
    );

    assert!(page.entries.is_empty());
    assert_eq!(page.total, 40);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn empty_result_still_has_one_page() {
    let dataset = Dataset::new(vec![record(1, Level::Error)]);

    let page = list(&dataset, &info_filter(), PageRequest::new(1, 25).unwrap());

    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 1);
    assert!(page.entries.is_empty());
}

#[test]
fn concatenated_pages_reproduce_the_filtered_set() {
    let dataset = mixed_dataset(1_237);
    let specs = [
        FilterSpec::default(),
        FilterSpec {
            level: Some(Level::Warn),
            ..Default::default()
        },
        FilterSpec {
            categories: vec!["queue".into(), "basesrc".into()],
            pid: Some(1001),
            ..Default::default()
        },
        FilterSpec {
            message_regex: Some("payload (3|7)".into()),
            ..Default::default()
        },
    ];

    for spec in specs {
        let filter = spec.compile().unwrap();
        let expected: Vec<&Record> = matching(&dataset, &filter).collect();

        for per_page in [1usize, 7, 100, 5_000] {
            let first = list(&dataset, &filter, PageRequest::new(1, per_page).unwrap());
            assert_eq!(first.total, expected.len());
            assert_eq!(first.total, count(&dataset, &filter));

            let mut collected = Vec::new();
            for page in 1..=first.total_pages {
                let p = list(&dataset, &filter, PageRequest::new(page, per_page).unwrap());
                assert!(p.entries.len() <= per_page);
                collected.extend(p.entries);
            }

            let expected_owned: Vec<Record> = expected.iter().map(|r| (*r).clone()).collect();
            assert_eq!(collected, expected_owned, "{spec:?} per_page={per_page}");
        }
    }
}

#[test]
fn everything_request_holds_all_matches() {
    let dataset = mixed_dataset(500);
    let filter = info_filter();

    let page = list(&dataset, &filter, PageRequest::everything());

    assert_eq!(page.entries.len(), page.total);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn repeated_queries_are_identical() {
    let dataset = mixed_dataset(300);
    let filter = info_filter();
    let req = PageRequest::new(2, 13).unwrap();

    let a = list(&dataset, &filter, req);
    let b = list(&dataset, &filter, req);

    assert_eq!(a.entries, b.entries);
    assert_eq!(a.total, b.total);
}

#[test]
fn distinct_values_have_no_duplicates() {
    let dataset = mixed_dataset(2_000);

    let values = distinct_values(&dataset);

    assert_eq!(
        values.levels.into_iter().collect::<Vec<_>>(),
        vec![Level::Error, Level::Warn, Level::Info, Level::Debug]
    );
    assert_eq!(values.categories.len(), 4);
    assert_eq!(values.pids.into_iter().collect::<Vec<_>>(), vec![1000, 1001]);
    assert_eq!(values.threads.len(), 3);
    assert!(values.objects.len() <= 4);
}

#[test]
fn distinct_values_skip_absent_fields() {
    let dataset = Dataset::new(vec![Record::at(Default::default())]);

    let values = distinct_values(&dataset);

    assert!(values.levels.is_empty());
    assert!(values.categories.is_empty());
    assert!(values.objects.is_empty());
}
