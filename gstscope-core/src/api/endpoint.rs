use http::Method;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    Upload,
    FilterOptions,
    Logs,
    Timeline,
    Health,
}

impl ApiEndpoint {
    pub fn method(&self) -> Method {
        match self {
            ApiEndpoint::Upload => Method::POST,
            _ => Method::GET,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            ApiEndpoint::Upload => "/api/upload",
            ApiEndpoint::FilterOptions => "/api/filter-options",
            ApiEndpoint::Logs => "/api/logs",
            ApiEndpoint::Timeline => "/api/timeline",
            ApiEndpoint::Health => "/api/health",
        }
    }
}

impl FromStr for ApiEndpoint {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches('/') {
            "/api/upload" => Ok(ApiEndpoint::Upload),
            "/api/filter-options" => Ok(ApiEndpoint::FilterOptions),
            "/api/logs" => Ok(ApiEndpoint::Logs),
            "/api/timeline" => Ok(ApiEndpoint::Timeline),
            "/api/health" => Ok(ApiEndpoint::Health),
            _ => Err("unknown api endpoint"),
        }
    }
}
