//! 路由组装

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::gateway::handler::{graphiql, graphql_handler, health_check, AppState};
use crate::core::middleware::{not_found, request_logging_middleware};
use crate::infrastructure::config::HttpConfig;

pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
