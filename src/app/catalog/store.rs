//! 产品目录存储
//!
//! `CatalogStore` 持有有序的产品序列，负责 id 分配、部分更新和删除。
//! `CatalogHandle` 把它包进读写锁，供并发的请求处理共享。

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::model::{NewProduct, Product, ProductPatch};
use super::seed::sample_products;

/// id 分配策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// 新 id = 当前记录数 + 1；删除后再插入可能与现存 id 重复
    #[default]
    SizeBased,
    /// 单调递增计数器，已发放的 id 不会再次出现
    Monotonic,
}

impl std::str::FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "size_based" => Ok(IdPolicy::SizeBased),
            "monotonic" => Ok(IdPolicy::Monotonic),
            other => Err(format!("未知的 id 策略: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    id_policy: IdPolicy,
    // Monotonic 策略下最后发放的 id
    last_issued: u64,
}

impl CatalogStore {
    /// 创建空存储
    pub fn new(id_policy: IdPolicy) -> Self {
        Self::with_products(Vec::new(), id_policy)
    }

    /// 以给定记录初始化
    pub fn with_products(products: Vec<Product>, id_policy: IdPolicy) -> Self {
        let highest_numeric = products
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let last_issued = highest_numeric.max(products.len() as u64);

        Self {
            products,
            id_policy,
            last_issued,
        }
    }

    /// 以示例数据初始化
    pub fn seeded(id_policy: IdPolicy) -> Self {
        Self::with_products(sample_products(), id_policy)
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 线性查找第一条 id 完全相等的记录
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    fn next_id(&mut self) -> String {
        match self.id_policy {
            IdPolicy::SizeBased => {
                let id = (self.products.len() + 1).to_string();
                if self.get_by_id(&id).is_some() {
                    warn!("按记录数分配的 id {} 与现存记录重复", id);
                }
                id
            }
            IdPolicy::Monotonic => {
                self.last_issued += 1;
                self.last_issued.to_string()
            }
        }
    }

    /// 分配 id 并追加到末尾
    pub fn insert(&mut self, new_product: NewProduct) -> Product {
        let id = self.next_id();
        let product = new_product.into_product(id);
        self.products.push(product.clone());

        debug!("新增产品 {} ({})", product.id, product.title);
        product
    }

    /// 在原位置替换为合并后的记录；id 不存在时返回 `None`
    pub fn update(&mut self, id: &str, patch: ProductPatch) -> Option<Product> {
        let index = self.position(id)?;
        let updated = patch.apply(&self.products[index]);
        self.products[index] = updated.clone();

        debug!("更新产品 {}", id);
        Some(updated)
    }

    /// 删除第一条匹配的记录，其余记录保持相对顺序
    pub fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.products.remove(index);
                debug!("删除产品 {}", id);
                true
            }
            None => false,
        }
    }
}

/// 可克隆的共享存储句柄
///
/// 每个操作只获取一次锁，查找和修改在同一临界区内完成。
#[derive(Clone)]
pub struct CatalogHandle {
    inner: Arc<RwLock<CatalogStore>>,
}

impl CatalogHandle {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn list(&self) -> Vec<Product> {
        self.inner.read().list().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Product> {
        self.inner.read().get_by_id(id).cloned()
    }

    pub fn insert(&self, new_product: NewProduct) -> Product {
        self.inner.write().insert(new_product)
    }

    pub fn update(&self, id: &str, patch: ProductPatch) -> Option<Product> {
        self.inner.write().update(id, patch)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.inner.write().delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn tablet() -> NewProduct {
        NewProduct::new("Tablet", "Electronics", 3999.99, true)
    }

    #[test]
    fn test_every_record_is_found_by_its_id() {
        let store = CatalogStore::seeded(IdPolicy::SizeBased);
        assert_eq!(store.len(), 10);

        for product in store.list() {
            assert_eq!(store.get_by_id(&product.id), Some(product));
        }
    }

    #[test]
    fn test_get_by_id_is_exact_match() {
        let store = CatalogStore::seeded(IdPolicy::SizeBased);
        assert!(store.get_by_id("01").is_none());
        assert!(store.get_by_id(" 1").is_none());
        assert!(store.get_by_id("").is_none());
    }

    #[test]
    fn test_insert_appends_with_size_based_id() {
        let mut store = CatalogStore::seeded(IdPolicy::SizeBased);
        let created = store.insert(tablet());

        assert_eq!(created.id, "11");
        assert_eq!(store.len(), 11);
        assert_eq!(store.list().last(), Some(&created));
    }

    #[test]
    fn test_size_based_id_can_repeat_after_delete() {
        let mut store = CatalogStore::seeded(IdPolicy::SizeBased);
        assert!(store.delete("3"));

        let created = store.insert(tablet());
        assert_eq!(created.id, "10");
        assert_eq!(store.list().iter().filter(|p| p.id == "10").count(), 2);
        // 第一条匹配仍是原记录
        assert_eq!(store.get_by_id("10").unwrap().title, "Air Conditioner");
    }

    #[test]
    fn test_monotonic_id_never_repeats() {
        let mut store = CatalogStore::seeded(IdPolicy::Monotonic);
        assert!(store.delete("3"));
        assert!(store.delete("10"));

        let first = store.insert(tablet());
        let second = store.insert(tablet());
        assert_eq!(first.id, "11");
        assert_eq!(second.id, "12");
    }

    #[test]
    fn test_monotonic_starts_after_highest_numeric_id() {
        let seed = vec![NewProduct::new("Kettle", "Home", 10.0, true).into_product("42".into())];
        let mut store = CatalogStore::with_products(seed, IdPolicy::Monotonic);
        assert_eq!(store.insert(tablet()).id, "43");
    }

    #[test]
    fn test_empty_store_issues_first_id() {
        let mut store = CatalogStore::new(IdPolicy::SizeBased);
        assert!(store.is_empty());
        assert_eq!(store.insert(tablet()).id, "1");
    }

    #[test]
    fn test_update_changes_only_given_field() {
        let mut store = CatalogStore::seeded(IdPolicy::SizeBased);
        let before = store.get_by_id("1").cloned().unwrap();

        let patch = ProductPatch {
            price: Some(1.5),
            ..Default::default()
        };
        let updated = store.update("1", patch).unwrap();

        assert_eq!(updated.price, 1.5);
        assert_eq!(updated.id, before.id);
        assert_eq!(updated.title, before.title);
        assert_eq!(updated.category, before.category);
        assert_eq!(updated.in_stock, before.in_stock);
        // 原位置替换
        assert_eq!(store.list()[0], updated);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut store = CatalogStore::seeded(IdPolicy::SizeBased);
        let patch = ProductPatch {
            title: Some("Gaming Laptop".to_string()),
            in_stock: Some(false),
            ..Default::default()
        };

        let once = store.update("1", patch.clone()).unwrap();
        let twice = store.update("1", patch).unwrap();
        assert_eq!(once, twice);
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_update_missing_id_leaves_store_unchanged() {
        let mut store = CatalogStore::seeded(IdPolicy::SizeBased);
        let before = store.list().to_vec();

        let patch = ProductPatch {
            price: Some(0.0),
            ..Default::default()
        };
        assert!(store.update("999", patch).is_none());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_one_and_keeps_order() {
        let mut store = CatalogStore::seeded(IdPolicy::SizeBased);
        assert!(store.delete("3"));
        assert!(store.get_by_id("3").is_none());

        let ids: Vec<&str> = store.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_delete_missing_id_returns_false() {
        let mut store = CatalogStore::seeded(IdPolicy::SizeBased);
        let before = store.list().to_vec();

        assert!(!store.delete("42"));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_id_policy_from_str() {
        assert_eq!("size_based".parse::<IdPolicy>(), Ok(IdPolicy::SizeBased));
        assert_eq!("monotonic".parse::<IdPolicy>(), Ok(IdPolicy::Monotonic));
        assert!("uuid".parse::<IdPolicy>().is_err());
    }

    #[test]
    fn test_handle_serializes_concurrent_inserts() {
        let handle = CatalogHandle::new(CatalogStore::new(IdPolicy::SizeBased));

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let handle = handle.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        handle.insert(tablet());
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let mut ids: Vec<u64> = handle
            .list()
            .iter()
            .map(|p| p.id.parse().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=200).collect::<Vec<u64>>());
    }
}
