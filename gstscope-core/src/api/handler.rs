use crate::api::types::{ErrorBody, HealthResponse, LogsResponse, TimelineResponse, UploadResponse};
use crate::api::{ApiEndpoint, ApiRequest, ApiResponse, QueryParams};
use crate::engine::LogEngine;
use crate::error::EngineError;
use crate::filter::FilterError;
use crate::ingest::IngestionPipeline;
use crate::query::PageRequest;
use crate::timeline::Interval;
use http::{Method, StatusCode};

/// Request-level bounds and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiLimits {
    pub default_per_page: usize,
    pub max_per_page: usize,
    pub default_interval: Interval,
    pub max_upload_bytes: usize,
}

impl Default for ApiLimits {
    fn default() -> Self {
        Self {
            default_per_page: 100,
            max_per_page: 1000,
            default_interval: Interval::S1,
            max_upload_bytes: 500 * 1024 * 1024,
        }
    }
}

pub struct ApiHandler {
    pipeline: IngestionPipeline,
    engine: LogEngine,
    limits: ApiLimits,
}

impl ApiHandler {
    pub fn new(pipeline: IngestionPipeline, limits: ApiLimits) -> Self {
        let engine = LogEngine::new(pipeline.store().clone());
        Self {
            pipeline,
            engine,
            limits,
        }
    }

    pub fn limits(&self) -> &ApiLimits {
        &self.limits
    }

    /// Route and answer a request. Uploads spawn parsing on the current
    /// tokio runtime.
    pub fn handle(&self, req: ApiRequest) -> ApiResponse {
        let Ok(endpoint) = req.path.parse::<ApiEndpoint>() else {
            return ApiResponse::error(StatusCode::NOT_FOUND, format!("no route for {}", req.path));
        };

        if req.method == Method::OPTIONS {
            return ApiResponse::preflight(endpoint.method());
        }
        if req.method != endpoint.method() {
            return ApiResponse::method_not_allowed(endpoint.method());
        }

        let params = QueryParams::parse(req.query.as_deref());
        let result = match endpoint {
            ApiEndpoint::Upload => return self.upload(req),
            ApiEndpoint::Health => return self.health(),
            ApiEndpoint::FilterOptions => self.filter_options(&params),
            ApiEndpoint::Logs => self.logs(&params),
            ApiEndpoint::Timeline => self.timeline(&params),
        };

        result.unwrap_or_else(|e| error_response(endpoint, &e))
    }

    fn upload(&self, req: ApiRequest) -> ApiResponse {
        if req.body.is_empty() {
            return ApiResponse::error(StatusCode::BAD_REQUEST, "empty upload");
        }
        if req.body.len() > self.limits.max_upload_bytes {
            return ApiResponse::error(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("upload exceeds {} bytes", self.limits.max_upload_bytes),
            );
        }

        // The session outlives the request; the join handle is not needed.
        let (id, _handle) = match self.pipeline.submit(req.body) {
            Ok(submitted) => submitted,
            Err(e) => return error_response(ApiEndpoint::Upload, &e),
        };
        ApiResponse::json(
            StatusCode::OK,
            &UploadResponse {
                session_id: id.to_string(),
            },
        )
    }

    fn health(&self) -> ApiResponse {
        ApiResponse::json(
            StatusCode::OK,
            &HealthResponse {
                status: "ok".to_string(),
                sessions: self.pipeline.store().len(),
            },
        )
    }

    fn filter_options(&self, params: &QueryParams) -> Result<ApiResponse, EngineError> {
        let id = params.session_id()?;
        let options = self.engine.filter_options(&id)?;
        Ok(ApiResponse::json(StatusCode::OK, &options))
    }

    fn logs(&self, params: &QueryParams) -> Result<ApiResponse, EngineError> {
        let id = params.session_id()?;
        let filter = params.filter_spec()?;
        let request = self.page_request(params)?;

        let page = self.engine.list(&id, &filter, request)?;
        tracing::debug!(
            session_id = %id,
            total = page.total,
            page = page.page,
            returned = page.entries.len(),
            "logs query"
        );
        Ok(ApiResponse::json(StatusCode::OK, &LogsResponse::from(&page)))
    }

    fn timeline(&self, params: &QueryParams) -> Result<ApiResponse, EngineError> {
        let id = params.session_id()?;
        let filter = params.filter_spec()?;
        let interval = params
            .get("interval")
            .map(|v| v.parse::<Interval>())
            .transpose()?
            .unwrap_or(self.limits.default_interval);

        let timeline = self.engine.timeline(&id, &filter, interval)?;
        tracing::debug!(
            session_id = %id,
            %interval,
            buckets = timeline.buckets.len(),
            "timeline query"
        );
        Ok(ApiResponse::json(
            StatusCode::OK,
            &TimelineResponse::from(&timeline),
        ))
    }

    fn page_request(&self, params: &QueryParams) -> Result<PageRequest, FilterError> {
        let page = params.parsed("page")?.unwrap_or(1);
        let per_page = params
            .parsed("per_page")?
            .unwrap_or(self.limits.default_per_page);

        if per_page > self.limits.max_per_page {
            return Err(FilterError::PerPageTooLarge {
                value: per_page,
                max: self.limits.max_per_page,
            });
        }
        PageRequest::new(page, per_page)
    }
}

fn error_response(endpoint: ApiEndpoint, err: &EngineError) -> ApiResponse {
    let path = endpoint.path();
    match err {
        EngineError::NotFound(_) => {
            tracing::debug!(path, error = %err, "session not available");
            ApiResponse::error(StatusCode::NOT_FOUND, err.to_string())
        }
        EngineError::IngestionFailed(reason) => {
            tracing::info!(path, reason = %reason, "query on failed session");
            ApiResponse::error_body(
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: err.to_string(),
                    state: Some("failed".to_string()),
                },
            )
        }
        EngineError::InvalidFilter(e) => {
            tracing::debug!(path, error = %e, "invalid request parameters");
            ApiResponse::error(StatusCode::BAD_REQUEST, e.to_string())
        }
        EngineError::InternalFault(detail) => {
            tracing::error!(path, detail = %detail, "internal fault");
            ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}
