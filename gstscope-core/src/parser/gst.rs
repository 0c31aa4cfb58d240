use crate::parser::{LogParser, ParseError, ParsedLog};
use crate::record::{Level, Record, Timestamp};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid ansi escape regex"));

// <clock> <pid> <thread> <LEVEL> <category> <file>:<line>:<function>:[<object>] <message>
static GST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<ts>\d+:\d{2}:\d{2}\.\d+)\s+",
        r"(?P<pid>\d+)\s+",
        r"(?P<thread>\S+)\s+",
        r"(?P<level>[A-Za-z]+)\s+",
        r"(?P<category>\S+)\s+",
        r"(?P<file>[^:\s]+):(?P<line>\d+):",
        r"(?P<function>\S*?):",
        r"(?:<(?P<object>[^>]*)>)?",
        r"(?:\s+(?P<message>.*))?$",
    ))
    .expect("valid gstreamer line regex")
});

/// Parser for GStreamer debug logs, colored or not.
#[derive(Debug, Default, Clone, Copy)]
pub struct GstDebugParser;

impl GstDebugParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a single line. Returns `None` when the line is not a log entry.
    pub fn parse_line(&self, line: &str) -> Option<Record> {
        let line = if line.contains('\x1b') {
            ANSI_ESCAPE.replace_all(line, "")
        } else {
            Cow::Borrowed(line)
        };

        let caps = GST_LINE.captures(&line)?;

        let timestamp = Timestamp::parse_clock(&caps["ts"]).ok()?;
        let level = caps["level"].parse::<Level>().ok()?;

        Some(Record {
            timestamp,
            level: Some(level),
            category: non_empty(&caps, "category"),
            pid: caps["pid"].parse().ok(),
            thread: non_empty(&caps, "thread"),
            object: non_empty(&caps, "object"),
            function: non_empty(&caps, "function"),
            file: non_empty(&caps, "file"),
            line: caps["line"].parse().ok(),
            message: caps
                .name("message")
                .map(|m| m.as_str().trim_end().to_string()),
        })
    }
}

impl LogParser for GstDebugParser {
    fn parse(&self, input: &[u8]) -> Result<ParsedLog, ParseError> {
        let text = String::from_utf8_lossy(input);
        let mut parsed = ParsedLog::default();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match self.parse_line(line) {
                Some(record) => parsed.records.push(record),
                None => parsed.skipped_lines += 1,
            }
        }

        if parsed.records.is_empty() {
            return Err(ParseError::NoEntries {
                skipped_lines: parsed.skipped_lines,
            });
        }

        Ok(parsed)
    }
}

fn non_empty(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
