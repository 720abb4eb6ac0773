//! # 内存产品目录服务
//!
//! 通过 GraphQL 提供产品的查询、创建、部分更新和删除，数据只保存在进程内存中。
//! - `app::catalog`: 产品模型与存储
//! - `app::gateway`: GraphQL schema 与 HTTP 处理器
//! - `core`: 错误、响应结构与中间件
//! - `infrastructure`: 配置与日志

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use app::catalog::{CatalogHandle, CatalogStore, IdPolicy, NewProduct, Product, ProductPatch};
pub use app::gateway::{build_schema, handler::AppState, CatalogSchema};
pub use router::build_router;
