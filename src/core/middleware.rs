//! 核心中间件模块

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 请求日志中间件，为每个请求分配 request id 并回写到响应头
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let span = info_span!("request", id = %request_id, %method, %uri);
    let mut response = next.run(req).instrument(span.clone()).await;
    let status = response.status();
    let duration = start.elapsed();

    span.in_scope(|| {
        info!(
            status = status.as_u16(),
            elapsed_ms = duration.as_millis() as u64,
            "{} {} - {}",
            method,
            uri,
            status
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
