//! 产品目录数据模型

use serde::{Deserialize, Serialize};

/// 目录中的一条产品记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub in_stock: bool,
}

/// 创建产品时提供的字段，`id` 由存储分配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub in_stock: bool,
}

impl NewProduct {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        in_stock: bool,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            price,
            in_stock,
        }
    }

    /// 绑定存储分配的 id，生成完整记录
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            title: self.title,
            category: self.category,
            price: self.price,
            in_stock: self.in_stock,
        }
    }
}

/// 部分更新：只有 `Some` 的字段会覆盖旧值
///
/// 这里没有 `id` 字段，记录身份只由查找键决定。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub in_stock: Option<bool>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.in_stock.is_none()
    }

    /// 浅合并，返回新记录，原记录不变
    pub fn apply(&self, product: &Product) -> Product {
        Product {
            id: product.id.clone(),
            title: self.title.clone().unwrap_or_else(|| product.title.clone()),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| product.category.clone()),
            price: self.price.unwrap_or(product.price),
            in_stock: self.in_stock.unwrap_or(product.in_stock),
        }
    }
}
