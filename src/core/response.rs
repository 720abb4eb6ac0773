//! 核心响应处理模块

use serde::Serialize;
use uuid::Uuid;

/// API 响应结构
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    /// 生成新的 request_id
    pub fn success(data: T) -> Self {
        Self::with_request_id(data, Uuid::new_v4().to_string())
    }

    pub fn with_request_id(data: T, request_id: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            request_id: request_id.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
