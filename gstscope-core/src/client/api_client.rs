use crate::api::types::{ErrorBody, FilterOptions, LogsResponse, TimelineResponse, UploadResponse};
use crate::client::{PollError, PollPolicy, PollStatus, poll_until_ready};
use crate::record::Level;
use crate::timeline::Interval;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error(transparent)]
    Poll(#[from] PollError),
}

/// Filter and page selection for `/api/logs`.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    pub level: Option<Level>,
    pub categories: Vec<String>,
    pub message_regex: Option<String>,
    pub function_regex: Option<String>,
    pub pid: Option<u32>,
    pub thread: Option<String>,
    pub object: Option<String>,
    pub min_timestamp: Option<u64>,
    pub max_timestamp: Option<u64>,
    pub use_microseconds: bool,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl LogQuery {
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(level) = self.level {
            pairs.push(("level", level.label().to_string()));
        }
        for category in &self.categories {
            pairs.push(("categories", category.clone()));
        }
        let optional = [
            ("message_regex", self.message_regex.clone()),
            ("function_regex", self.function_regex.clone()),
            ("pid", self.pid.map(|p| p.to_string())),
            ("thread", self.thread.clone()),
            ("object", self.object.clone()),
            ("min_timestamp", self.min_timestamp.map(|t| t.to_string())),
            ("max_timestamp", self.max_timestamp.map(|t| t.to_string())),
            ("page", self.page.map(|p| p.to_string())),
            ("per_page", self.per_page.map(|p| p.to_string())),
        ];
        pairs.extend(optional.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))));
        if self.use_microseconds {
            pairs.push(("use_microseconds", "true".to_string()));
        }

        pairs
    }
}

/// Filter plus bucket width for `/api/timeline`. Pagination is ignored.
#[derive(Debug, Clone, Default)]
pub struct TimelineQuery {
    pub filter: LogQuery,
    pub interval: Option<Interval>,
}

/// Blocking client for a running server.
pub struct GstscopeClient {
    base: Url,
    http: Client,
    poll: PollPolicy,
}

impl GstscopeClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_policy(base_url, PollPolicy::default())
    }

    pub fn with_policy(base_url: &str, poll: PollPolicy) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|source| ClientError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { base, http, poll })
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base.join(path).map_err(|source| ClientError::InvalidUrl {
            url: path.to_string(),
            source,
        })
    }

    /// Upload raw log bytes; returns the new session id.
    pub fn upload(&self, body: Vec<u8>) -> Result<String, ClientError> {
        let resp = self.http.post(self.url("/api/upload")?).body(body).send()?;
        let upload: UploadResponse = decode(resp)?;
        Ok(upload.session_id)
    }

    pub fn filter_options(&self, session_id: &str) -> Result<FilterOptions, ClientError> {
        let resp = self
            .http
            .get(self.url("/api/filter-options")?)
            .query(&[("session_id", session_id)])
            .send()?;
        decode(resp)
    }

    /// Poll filter options until the session is ready.
    ///
    /// 404 and transport errors count as not ready; a failed session ends
    /// the wait at once.
    pub fn wait_until_ready(&self, session_id: &str) -> Result<FilterOptions, ClientError> {
        let options = poll_until_ready(self.poll, |attempt| {
            match self.filter_options(session_id) {
                Ok(options) => PollStatus::Ready(options),
                Err(ClientError::Api { status, message })
                    if status == StatusCode::UNPROCESSABLE_ENTITY =>
                {
                    PollStatus::Failed(message)
                }
                Err(e) => {
                    tracing::debug!(session_id, attempt, error = %e, "filter options not available");
                    PollStatus::NotReady
                }
            }
        })?;
        Ok(options)
    }

    pub fn logs(&self, session_id: &str, query: &LogQuery) -> Result<LogsResponse, ClientError> {
        let resp = self
            .http
            .get(self.url("/api/logs")?)
            .query(&[("session_id", session_id)])
            .query(&query.pairs())
            .send()?;
        decode(resp)
    }

    pub fn timeline(
        &self,
        session_id: &str,
        query: &TimelineQuery,
    ) -> Result<TimelineResponse, ClientError> {
        let mut pairs = query.filter.pairs();
        pairs.retain(|(k, _)| *k != "page" && *k != "per_page");
        if let Some(interval) = query.interval {
            pairs.push(("interval", interval.label().to_string()));
        }

        let resp = self
            .http
            .get(self.url("/api/timeline")?)
            .query(&[("session_id", session_id)])
            .query(&pairs)
            .send()?;
        decode(resp)
    }
}

fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json()?);
    }

    let text = resp.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|e| e.error)
        .unwrap_or(text);
    Err(ClientError::Api { status, message })
}
