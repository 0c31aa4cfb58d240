use crate::filter::{CompiledFilter, FilterError, TimeRange};
use crate::record::Level;
use ahash::AHashSet;
use regex::Regex;

/// Field constraints supplied by the client. Every field is optional and an
/// empty `categories` list means "any category".
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub level: Option<Level>,
    pub categories: Vec<String>,
    pub message_regex: Option<String>,
    pub function_regex: Option<String>,
    pub pid: Option<u32>,
    pub thread: Option<String>,
    pub object: Option<String>,
    pub time_range: Option<TimeRange>,
}

impl FilterSpec {
    pub fn compile(&self) -> Result<CompiledFilter, FilterError> {
        let categories: AHashSet<String> = self
            .categories
            .iter()
            .map(|c| c.trim().to_string())
            .collect();

        Ok(CompiledFilter {
            level: self.level,
            categories,
            message: compile_regex("message_regex", self.message_regex.as_deref())?,
            function: compile_regex("function_regex", self.function_regex.as_deref())?,
            pid: self.pid,
            thread: self.thread.clone(),
            object: self.object.clone(),
            time_range: self.time_range,
        })
    }
}

fn compile_regex(field: &'static str, pattern: Option<&str>) -> Result<Option<Regex>, FilterError> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|source| FilterError::InvalidRegex {
                field,
                pattern: p.to_string(),
                source,
            })
        })
        .transpose()
}
