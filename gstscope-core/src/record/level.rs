use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// GStreamer debug levels, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Fixme,
    Info,
    Debug,
    Log,
    Trace,
    Memdump,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown level '{0}'")]
pub struct UnknownLevel(pub String);

impl Level {
    pub const ALL: [Level; 8] = [
        Level::Error,
        Level::Warn,
        Level::Fixme,
        Level::Info,
        Level::Debug,
        Level::Log,
        Level::Trace,
        Level::Memdump,
    ];

    /// The label GStreamer prints in the level column.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Fixme => "FIXME",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Log => "LOG",
            Level::Trace => "TRACE",
            Level::Memdump => "MEMDUMP",
        }
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "FIXME" => Ok(Level::Fixme),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "LOG" => Ok(Level::Log),
            "TRACE" => Ok(Level::Trace),
            "MEMDUMP" => Ok(Level::Memdump),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
