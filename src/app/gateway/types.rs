//! `Product` 的 GraphQL 输出类型

use async_graphql::{Object, ID};

use crate::app::catalog::Product;

#[Object]
impl Product {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn price(&self) -> f64 {
        self.price
    }

    async fn category(&self) -> &str {
        &self.category
    }

    async fn in_stock(&self) -> bool {
        self.in_stock
    }
}
