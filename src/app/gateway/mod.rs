//! GraphQL 网关
//!
//! 把具名的查询和变更转发到 [`CatalogHandle`]，本身不含业务逻辑：
//! - [`QueryRoot`]: `products`, `product`
//! - [`MutationRoot`]: `createProduct`, `deleteProduct`, `updateProduct`

mod mutation;
mod query;
mod types;

pub mod handler;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use async_graphql::{EmptySubscription, Schema};

use crate::app::catalog::CatalogHandle;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// 构建绑定到指定存储句柄的 schema
pub fn build_schema(catalog: CatalogHandle) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}
