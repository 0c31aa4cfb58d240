use crate::api::{ApiHandler, ApiRequest, ApiResponse};
use async_trait::async_trait;
use crate::server::body::BodyBuffer;
use bytes::Bytes;
use http::{StatusCode, header};
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};
use pingora_http::ResponseHeader;
use std::sync::Arc;
use std::time::Instant;

/// Serves the JSON API. Terminal: every request is answered in
/// `request_filter` and nothing is ever proxied.
pub struct ApiGateway {
    handler: Arc<ApiHandler>,
}

impl ApiGateway {
    pub fn new(handler: Arc<ApiHandler>) -> Self {
        Self { handler }
    }
}

enum Body {
    Complete(Bytes),
    TooLarge,
}

#[async_trait]
impl ProxyHttp for ApiGateway {
    type CTX = ();

    fn new_ctx(&self) -> Self::CTX {}

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        Err(Error::new(Custom(
            "ApiGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        let started = Instant::now();
        let header = session.req_header();
        let method = header.method.clone();
        let path = header.uri.path().to_owned();
        let query = header.uri.query().map(str::to_owned);

        let limit = self.handler.limits().max_upload_bytes;
        let response = match read_body(session, limit).await? {
            Body::Complete(body) => self.handler.handle(ApiRequest {
                method: method.clone(),
                path: path.clone(),
                query,
                body,
            }),
            Body::TooLarge => ApiResponse::error(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("upload exceeds {limit} bytes"),
            ),
        };

        tracing::info!(
            method = %method,
            path = %path,
            status = response.status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request handled"
        );

        send_response(session, response).await?;
        Ok(true)
    }
}

/// Buffer the request body, giving up as soon as it exceeds `limit`.
async fn read_body(session: &mut Session, limit: usize) -> pingora::Result<Body> {
    let declared = session
        .req_header()
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    let Ok(mut buf) = BodyBuffer::new(declared, limit) else {
        return Ok(Body::TooLarge);
    };

    while let Some(chunk) = session.read_request_body().await? {
        if buf.push(&chunk).is_err() {
            return Ok(Body::TooLarge);
        }
    }

    Ok(Body::Complete(buf.finish()))
}

async fn send_response(session: &mut Session, response: ApiResponse) -> pingora::Result<()> {
    let mut resp = ResponseHeader::build(response.status, None)?;
    if !response.body.is_empty() {
        resp.insert_header(header::CONTENT_TYPE, "application/json")?;
    }
    resp.insert_header(header::CONTENT_LENGTH, response.body.len().to_string())?;
    for (name, value) in response.headers() {
        resp.insert_header(name, value)?;
    }

    session.write_response_header(Box::new(resp), false).await?;
    session
        .write_response_body(Some(response.body.into()), true)
        .await?;

    Ok(())
}
