//! Log parsing capability consumed by ingestion.
//!
//! The engine only depends on [`LogParser`]. [`GstDebugParser`] is the
//! implementation wired in by default and understands the line format
//! produced by `GST_DEBUG`.

mod gst;


pub use gst::GstDebugParser;

use crate::record::Record;
use thiserror::Error;

/// The outcome of a successful parse.
#[derive(Debug, Default)]
pub struct ParsedLog {
    pub records: Vec<Record>,
    /// Non-empty lines that did not match the grammar.
    pub skipped_lines: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no log entries found ({skipped_lines} unrecognised lines); the file may be empty or not a GStreamer debug log")]
    NoEntries { skipped_lines: usize },
}

pub trait LogParser: Send + Sync {
    fn parse(&self, input: &[u8]) -> Result<ParsedLog, ParseError>;
}
