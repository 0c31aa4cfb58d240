//! Wire types for the JSON API.

use crate::query::Page;
use crate::record::{Level, Record, TimeUnit};
use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};

pub use crate::options::FilterOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
}

/// One record as the client sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryBody {
    /// GStreamer clock notation, e.g. `0:00:01.500000000`.
    pub ts: String,
    pub timestamp_ns: u64,
    pub pid: Option<u32>,
    pub thread: Option<String>,
    pub level: Option<Level>,
    pub category: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function: Option<String>,
    pub message: Option<String>,
    pub object: Option<String>,
}

impl From<&Record> for EntryBody {
    fn from(r: &Record) -> Self {
        Self {
            ts: r.timestamp.to_string(),
            timestamp_ns: r.timestamp.as_nanos(),
            pid: r.pid,
            thread: r.thread.clone(),
            level: r.level,
            category: r.category.clone(),
            file: r.file.clone(),
            line: r.line,
            function: r.function.clone(),
            message: r.message.clone(),
            object: r.object.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsResponse {
    pub entries: Vec<EntryBody>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

impl From<&Page> for LogsResponse {
    fn from(page: &Page) -> Self {
        Self {
            entries: page.entries.iter().map(EntryBody::from).collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketBody {
    pub timestamp: u64,
    pub count: usize,
}

/// Timeline with every timestamp expressed in `unit`.
///
/// `min_timestamp`/`max_timestamp` can be sent back verbatim as a time range
/// filter together with `use_microseconds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineResponse {
    pub buckets: Vec<BucketBody>,
    pub interval: String,
    pub unit: String,
    pub use_microseconds: bool,
    pub min_timestamp: u64,
    pub max_timestamp: u64,
}

impl From<&Timeline> for TimelineResponse {
    fn from(timeline: &Timeline) -> Self {
        let unit = timeline.interval.unit();
        Self {
            buckets: timeline
                .buckets
                .iter()
                .map(|b| BucketBody {
                    timestamp: b.timestamp.to_unit(unit),
                    count: b.count,
                })
                .collect(),
            interval: timeline.interval.label().to_string(),
            unit: unit.suffix().to_string(),
            use_microseconds: unit == TimeUnit::Microseconds,
            min_timestamp: timeline.min.map_or(0, |t| t.to_unit(unit)),
            max_timestamp: timeline.max.map_or(0, |t| t.to_unit(unit)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            state: None,
        }
    }
}
