use crate::filter::{FilterError, FilterSpec, TimeRange};
use crate::record::{Level, TimeUnit};
use crate::session::SessionId;
use std::str::FromStr;

/// Decoded query-string pairs in their original order.
///
/// Empty values are dropped on parse, so `?level=` is the same as no
/// `level` at all.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .filter(|(_, v)| !v.trim().is_empty())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    /// The first value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for a repeated `name`.
    pub fn all(&self, name: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn parsed<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, FilterError> {
        self.get(name)
            .map(|v| {
                v.trim()
                    .parse::<T>()
                    .map_err(|_| FilterError::invalid_param(name, v))
            })
            .transpose()
    }

    /// `true/false/1/0`, absent is `false`.
    pub fn flag(&self, name: &'static str) -> Result<bool, FilterError> {
        match self.get(name).map(|v| v.trim().to_ascii_lowercase()) {
            None => Ok(false),
            Some(v) if v == "true" || v == "1" => Ok(true),
            Some(v) if v == "false" || v == "0" => Ok(false),
            Some(v) => Err(FilterError::invalid_param(name, v)),
        }
    }

    pub fn session_id(&self) -> Result<SessionId, FilterError> {
        self.get("session_id")
            .map(|v| SessionId::from(v.trim()))
            .ok_or(FilterError::MissingParam { name: "session_id" })
    }

    /// The predicate shared by the logs and timeline endpoints.
    pub fn filter_spec(&self) -> Result<FilterSpec, FilterError> {
        let level = self
            .get("level")
            .map(|v| Level::from_str(v).map_err(|_| FilterError::invalid_param("level", v)))
            .transpose()?;

        let unit = TimeUnit::from_microseconds_flag(self.flag("use_microseconds")?);
        let time_range = TimeRange::from_bounds(
            self.parsed("min_timestamp")?,
            self.parsed("max_timestamp")?,
            unit,
        )?;

        Ok(FilterSpec {
            level,
            categories: self.all("categories"),
            message_regex: self.get("message_regex").map(str::to_string),
            function_regex: self.get("function_regex").map(str::to_string),
            pid: self.parsed("pid")?,
            thread: self.get("thread").map(str::to_string),
            object: self.get("object").map(str::to_string),
            time_range,
        })
    }
}
