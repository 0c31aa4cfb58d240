use thiserror::Error;

/// A malformed filter or query parameter. Fails the request, never the session.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid {field} '{pattern}': {source}")]
    InvalidRegex {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidParam { name: &'static str, value: String },

    #[error("missing required parameter '{name}'")]
    MissingParam { name: &'static str },

    #[error("invalid time range: min {min} is greater than max {max}")]
    InvertedTimeRange { min: u64, max: u64 },

    #[error("{name} must be at least 1")]
    ZeroPagination { name: &'static str },

    #[error("per_page {value} exceeds the maximum of {max}")]
    PerPageTooLarge { value: usize, max: usize },

    #[error("unknown interval '{0}'")]
    UnknownInterval(String),
}

impl FilterError {
    pub fn invalid_param(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParam {
            name,
            value: value.into(),
        }
    }
}
