//! GraphQL HTTP 处理器

use async_graphql::{http::GraphiQLSource, BatchRequest, BatchResponse};
use axum::{
    body::Bytes,
    extract::State,
    response::{Html, Json},
    Extension,
};
use serde::Serialize;
use tracing::debug;

use super::{build_schema, CatalogSchema};
use crate::app::catalog::CatalogHandle;
use crate::core::{error::CoreError, middleware::RequestId, response::ApiResponse};

#[derive(Clone)]
pub struct AppState {
    pub schema: CatalogSchema,
    pub catalog: CatalogHandle,
}

impl AppState {
    pub fn new(catalog: CatalogHandle) -> Self {
        Self {
            schema: build_schema(catalog.clone()),
            catalog,
        }
    }
}

/// 执行单个或批量 GraphQL 请求
pub async fn graphql_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BatchResponse>, CoreError> {
    let request: BatchRequest = serde_json::from_slice(&body)
        .map_err(|e| CoreError::BadRequest(format!("无效的 GraphQL 请求: {}", e)))?;

    if let BatchRequest::Single(ref single) = request {
        debug!(operation = ?single.operation_name, "执行 GraphQL 请求");
    }

    Ok(Json(state.schema.execute_batch(request).await))
}

/// GraphiQL 调试页面
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub products: usize,
}

/// 健康检查
pub async fn health_check(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
) -> Json<ApiResponse<HealthStatus>> {
    let status = HealthStatus {
        status: "ok",
        products: state.catalog.len(),
    };
    let response = match request_id {
        Some(Extension(RequestId(id))) => ApiResponse::with_request_id(status, id),
        None => ApiResponse::success(status),
    };
    Json(response)
}
