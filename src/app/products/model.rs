//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 产品实体
///
/// `id` 由调用方提供，存储层不保证唯一。`name` 与 `price` 不做任何校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// 启动时预置的产品
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Product1", 10.5),
        Product::new(2, "Product2", 20.0),
    ]
}
