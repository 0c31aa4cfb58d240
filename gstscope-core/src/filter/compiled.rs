use crate::filter::TimeRange;
use crate::record::{Level, Record};
use ahash::AHashSet;
use regex::Regex;

/// The conjunction of every clause in a [`FilterSpec`](crate::filter::FilterSpec).
///
/// Absent clauses always match. A present clause never matches a record
/// whose corresponding field is absent.
#[derive(Debug, Clone, Default)]
pub struct CompiledFilter {
    pub(super) level: Option<Level>,
    pub(super) categories: AHashSet<String>,
    pub(super) message: Option<Regex>,
    pub(super) function: Option<Regex>,
    pub(super) pid: Option<u32>,
    pub(super) thread: Option<String>,
    pub(super) object: Option<String>,
    pub(super) time_range: Option<TimeRange>,
}

impl CompiledFilter {
    /// A filter that matches every record.
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.level.is_none()
            && self.categories.is_empty()
            && self.message.is_none()
            && self.function.is_none()
            && self.pid.is_none()
            && self.thread.is_none()
            && self.object.is_none()
            && self.time_range.is_none()
    }

    pub fn matches(&self, record: &Record) -> bool {
        // Cheapest clauses first; regexes last.
        if let Some(range) = &self.time_range
            && !range.contains(record.timestamp)
        {
            return false;
        }

        if self.level.is_some() && record.level != self.level {
            return false;
        }

        if self.pid.is_some() && record.pid != self.pid {
            return false;
        }

        if !exact(self.thread.as_deref(), record.thread.as_deref()) {
            return false;
        }

        if !exact(self.object.as_deref(), record.object.as_deref()) {
            return false;
        }

        if !self.categories.is_empty() {
            match &record.category {
                Some(category) if self.categories.contains(category.as_str()) => {}
                _ => return false,
            }
        }

        if !search(self.message.as_ref(), record.message.as_deref()) {
            return false;
        }

        search(self.function.as_ref(), record.function.as_deref())
    }
}

fn exact(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual == Some(w),
    }
}

fn search(regex: Option<&Regex>, haystack: Option<&str>) -> bool {
    match (regex, haystack) {
        (None, _) => true,
        (Some(re), Some(text)) => re.is_match(text),
        (Some(_), None) => false,
    }
}
