use async_graphql::{Context, Object, Result, ID};

use crate::app::catalog::{CatalogHandle, Product};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// 返回全部产品（列表元素可空，与既有 schema `[Product]!` 保持一致）
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<Option<Product>>> {
        let catalog = ctx.data::<CatalogHandle>()?;
        Ok(catalog.list().into_iter().map(Some).collect())
    }

    /// 按 id 查询单个产品，不存在时返回 null
    async fn product(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Product>> {
        let catalog = ctx.data::<CatalogHandle>()?;
        Ok(catalog.get_by_id(&id))
    }
}
