use async_graphql::{Context, Object, Result, ID};

use crate::app::catalog::{CatalogHandle, NewProduct, Product, ProductPatch};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// 创建产品，id 由存储分配
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        title: String,
        category: String,
        price: f64,
        in_stock: bool,
    ) -> Result<Option<Product>> {
        let catalog = ctx.data::<CatalogHandle>()?;
        let product = catalog.insert(NewProduct {
            title,
            category,
            price,
            in_stock,
        });
        Ok(Some(product))
    }

    /// 删除产品，id 不存在时返回 false
    async fn delete_product(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        let catalog = ctx.data::<CatalogHandle>()?;
        Ok(Some(catalog.delete(&id)))
    }

    /// 部分更新产品
    ///
    /// 省略的参数和显式的 null 都表示保留原值。
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        category: Option<String>,
        price: Option<f64>,
        in_stock: Option<bool>,
    ) -> Result<Option<Product>> {
        let catalog = ctx.data::<CatalogHandle>()?;
        let patch = ProductPatch {
            title,
            category,
            price,
            in_stock,
        };
        Ok(catalog.update(&id, patch))
    }
}
