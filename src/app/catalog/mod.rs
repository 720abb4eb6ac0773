//! 产品目录：数据模型与内存存储

pub mod model;
pub mod seed;
pub mod store;

pub use model::{NewProduct, Product, ProductPatch};
pub use store::{CatalogHandle, CatalogStore, IdPolicy};
