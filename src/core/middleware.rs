//! 核心中间件模块

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 当前请求的 id，由日志中间件写入请求扩展
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// 请求日志中间件，并为响应附加 `x-request-id`
pub async fn request_logging_middleware(mut req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    req.extensions_mut().insert(RequestId(request_id.clone()));

    let mut response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        "{} {} - {} - {}ms - request_id: {}",
        method,
        uri,
        status,
        duration.as_millis(),
        request_id
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// 未匹配路由
pub async fn not_found(uri: axum::http::Uri) -> crate::core::error::CoreError {
    crate::core::error::CoreError::NotFound(format!("路径 {} 不存在", uri.path()))
}
