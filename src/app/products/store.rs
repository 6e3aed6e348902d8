//! 产品存储层
//!
//! 进程生命周期内的内存集合。所有操作在同一把互斥锁下执行，互不交错。

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::model::{seed_products, Product};

/// 产品仓储接口
///
/// 存储层从不返回错误，查找不到时以 `None` 表示。
pub trait ProductRepository: Send + Sync {
    /// 按插入顺序返回全部产品
    fn list(&self) -> Vec<Product>;

    /// 返回第一个 id 匹配的产品
    fn get_by_id(&self, id: i32) -> Option<Product>;

    /// 无条件追加，不检查 id 是否重复
    fn add(&self, product: Product);

    /// 按 `product.id` 覆盖名称和价格，不存在时静默忽略
    fn update(&self, product: Product);

    /// 按 id 删除，不存在时静默忽略
    fn delete(&self, id: i32);
}

/// 基于 `Mutex<Vec<_>>` 的内存仓储
#[derive(Debug)]
pub struct InMemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductStore {
    /// 创建带预置数据的存储
    pub fn new() -> Self {
        Self::with_products(seed_products())
    }

    pub fn empty() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // 每次修改都是单步完成，锁中毒后数据依然一致
    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductStore {
    fn list(&self) -> Vec<Product> {
        self.lock().clone()
    }

    fn get_by_id(&self, id: i32) -> Option<Product> {
        self.lock().iter().find(|p| p.id == id).cloned()
    }

    fn add(&self, product: Product) {
        self.lock().push(product);
    }

    fn update(&self, product: Product) {
        let mut products = self.lock();
        if let Some(existing) = products.iter_mut().find(|p| p.id == product.id) {
            existing.name = product.name;
            existing.price = product.price;
        }
    }

    fn delete(&self, id: i32) {
        let mut products = self.lock();
        if let Some(index) = products.iter().position(|p| p.id == id) {
            products.remove(index);
        }
    }
}
