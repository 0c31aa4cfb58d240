use crate::filter::FilterError;
use crate::record::TimeUnit;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const US: u64 = 1_000;
const MS: u64 = 1_000_000;
const S: u64 = 1_000_000_000;

/// The fixed set of bucket widths a timeline can be built at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Interval {
    Us100,
    Us250,
    Us500,
    Ms1,
    Ms5,
    Ms10,
    Ms50,
    Ms100,
    Ms500,
    #[default]
    S1,
    S5,
    S10,
    S30,
    M1,
    M5,
}

impl Interval {
    pub const ALL: [Interval; 15] = [
        Interval::Us100,
        Interval::Us250,
        Interval::Us500,
        Interval::Ms1,
        Interval::Ms5,
        Interval::Ms10,
        Interval::Ms50,
        Interval::Ms100,
        Interval::Ms500,
        Interval::S1,
        Interval::S5,
        Interval::S10,
        Interval::S30,
        Interval::M1,
        Interval::M5,
    ];

    pub fn as_nanos(&self) -> u64 {
        match self {
            Interval::Us100 => 100 * US,
            Interval::Us250 => 250 * US,
            Interval::Us500 => 500 * US,
            Interval::Ms1 => MS,
            Interval::Ms5 => 5 * MS,
            Interval::Ms10 => 10 * MS,
            Interval::Ms50 => 50 * MS,
            Interval::Ms100 => 100 * MS,
            Interval::Ms500 => 500 * MS,
            Interval::S1 => S,
            Interval::S5 => 5 * S,
            Interval::S10 => 10 * S,
            Interval::S30 => 30 * S,
            Interval::M1 => 60 * S,
            Interval::M5 => 300 * S,
        }
    }

    /// The unit bucket timestamps are reported in for this width.
    ///
    /// Every width is a whole multiple of its unit, so the conversion is exact.
    pub fn unit(&self) -> TimeUnit {
        match self {
            Interval::Us100 | Interval::Us250 | Interval::Us500 => TimeUnit::Microseconds,
            _ => TimeUnit::Milliseconds,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interval::Us100 => "100us",
            Interval::Us250 => "250us",
            Interval::Us500 => "500us",
            Interval::Ms1 => "1ms",
            Interval::Ms5 => "5ms",
            Interval::Ms10 => "10ms",
            Interval::Ms50 => "50ms",
            Interval::Ms100 => "100ms",
            Interval::Ms500 => "500ms",
            Interval::S1 => "1s",
            Interval::S5 => "5s",
            Interval::S10 => "10s",
            Interval::S30 => "30s",
            Interval::M1 => "1m",
            Interval::M5 => "5m",
        }
    }
}

impl FromStr for Interval {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Interval::ALL
            .into_iter()
            .find(|i| i.label() == wanted)
            .ok_or_else(|| FilterError::UnknownInterval(s.to_string()))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
