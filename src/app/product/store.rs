//! 产品内存存储

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::model::Product;

/// 以 id 为键的内存产品目录，克隆后共享同一份数据
#[derive(Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带有两条初始记录的目录
    pub fn seeded() -> Self {
        let store = Self::new();
        store.put("1", Product::new("1", "Laptop", 1200.00));
        store.put("2", Product::new("2", "Mouse", 25.00));
        store
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// 插入或覆盖
    pub fn put(&self, id: impl Into<String>, product: Product) {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), product);
    }

    pub fn size(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
