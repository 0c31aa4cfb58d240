use crate::filter::CompiledFilter;
use crate::query::matching;
use crate::record::Timestamp;
use crate::session::Dataset;
use crate::timeline::Interval;
use ahash::AHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Start of the window, `floor(ts / width) * width`.
    pub timestamp: Timestamp,
    pub count: usize,
}

/// A sparse histogram: only windows holding at least one match appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub interval: Interval,
    /// Ascending by `timestamp`, keys unique.
    pub buckets: Vec<Bucket>,
    /// Earliest and latest matching timestamp. `None` when nothing matched.
    pub min: Option<Timestamp>,
    pub max: Option<Timestamp>,
}

impl Timeline {
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

pub fn aggregate(dataset: &Dataset, filter: &CompiledFilter, interval: Interval) -> Timeline {
    let width = interval.as_nanos();
    let mut counts: AHashMap<u64, usize> = AHashMap::new();
    let mut min: Option<Timestamp> = None;
    let mut max: Option<Timestamp> = None;

    for record in matching(dataset, filter) {
        let ts = record.timestamp;
        let key = (ts.as_nanos() / width) * width;
        *counts.entry(key).or_insert(0) += 1;

        min = Some(min.map_or(ts, |m| m.min(ts)));
        max = Some(max.map_or(ts, |m| m.max(ts)));
    }

    let mut buckets: Vec<Bucket> = counts
        .into_iter()
        .map(|(key, count)| Bucket {
            timestamp: Timestamp::from_nanos(key),
            count,
        })
        .collect();
    buckets.sort_by_key(|b| b.timestamp);

    Timeline {
        interval,
        buckets,
        min,
        max,
    }
}
