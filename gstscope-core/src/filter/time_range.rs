use crate::filter::FilterError;
use crate::record::{TimeUnit, Timestamp};

/// Inclusive `[min, max]` window in the unit the client selected it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    min: u64,
    max: u64,
    unit: TimeUnit,
}

impl TimeRange {
    pub fn new(min: u64, max: u64, unit: TimeUnit) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvertedTimeRange { min, max });
        }
        Ok(Self { min, max, unit })
    }

    /// Build a range from optional bounds; a missing bound is open.
    pub fn from_bounds(
        min: Option<u64>,
        max: Option<u64>,
        unit: TimeUnit,
    ) -> Result<Option<Self>, FilterError> {
        match (min, max) {
            (None, None) => Ok(None),
            (min, max) => Self::new(min.unwrap_or(0), max.unwrap_or(u64::MAX), unit).map(Some),
        }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// The record timestamp is converted into the range's unit, never the
    /// other way around.
    pub fn contains(&self, ts: Timestamp) -> bool {
        let value = ts.to_unit(self.unit);
        self.min <= value && value <= self.max
    }
}
