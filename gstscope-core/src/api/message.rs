use crate::api::types::ErrorBody;
use bytes::Bytes;
use http::header::{self, HeaderName};
use http::{Method, StatusCode};
use serde::Serialize;

/// A fully buffered request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Bytes,
}

impl ApiRequest {
    pub fn get(path: &str, query: Option<&str>) -> Self {
        Self {
            method: Method::GET,
            path: path.to_string(),
            query: query.map(str::to_string),
            body: Bytes::new(),
        }
    }

    pub fn post(path: &str, body: impl Into<Bytes>) -> Self {
        Self {
            method: Method::POST,
            path: path.to_string(),
            query: None,
            body: body.into(),
        }
    }
}

/// How long browsers may cache a preflight answer, in seconds.
const PREFLIGHT_MAX_AGE: &str = "86400";

/// A JSON response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    /// Set for 405 and preflight responses.
    pub allow: Option<Method>,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status,
                body,
                allow: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "json serialization failed");
                Self::error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::error_body(status, ErrorBody::new(message))
    }

    pub fn error_body(status: StatusCode, body: ErrorBody) -> Self {
        // ErrorBody only holds strings.
        let body = serde_json::to_vec(&body).unwrap_or_else(|_| b"{}".to_vec());
        Self {
            status,
            body,
            allow: None,
        }
    }

    pub fn method_not_allowed(allow: Method) -> Self {
        Self {
            allow: Some(allow),
            ..Self::error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
        }
    }

    /// Answer to a CORS preflight for an endpoint served with `allow`.
    pub fn preflight(allow: Method) -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: Vec::new(),
            allow: Some(allow),
        }
    }

    fn is_preflight(&self) -> bool {
        self.status == StatusCode::NO_CONTENT && self.allow.is_some()
    }

    /// Headers besides `Content-Type` and `Content-Length`.
    ///
    /// CORS is permissive: the API may be called from any origin.
    pub fn headers(&self) -> Vec<(HeaderName, String)> {
        let mut out = vec![(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string())];

        if let Some(allow) = &self.allow {
            out.push((header::ALLOW, allow.to_string()));
            if self.is_preflight() {
                out.push((
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    format!("{allow}, {}", Method::OPTIONS),
                ));
                out.push((header::ACCESS_CONTROL_ALLOW_HEADERS, "*".to_string()));
                out.push((
                    header::ACCESS_CONTROL_MAX_AGE,
                    PREFLIGHT_MAX_AGE.to_string(),
                ));
            }
        }
        if self.status == StatusCode::PAYLOAD_TOO_LARGE {
            // The rest of the body was not read.
            out.push((header::CONNECTION, "close".to_string()));
        }

        out
    }
}
