mod level;
mod timestamp;


pub use level::{Level, UnknownLevel};
pub use timestamp::{InvalidClock, TimeUnit, Timestamp};

/// One parsed log event.
///
/// Only `timestamp` is guaranteed. Every other field may be absent, and an
/// absent field never satisfies a filter clause on that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub timestamp: Timestamp,
    pub level: Option<Level>,
    pub category: Option<String>,
    pub pid: Option<u32>,
    pub thread: Option<String>,
    /// The originating component instance, e.g. `<videotestsrc0>`.
    pub object: Option<String>,
    pub function: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub message: Option<String>,
}

impl Record {
    /// A record carrying only a timestamp.
    pub fn at(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            level: None,
            category: None,
            pid: None,
            thread: None,
            object: None,
            function: None,
            file: None,
            line: None,
            message: None,
        }
    }
}
