//! 产品资源：模型、存储、服务与处理器

pub mod handler;
pub mod model;
pub mod service;
pub mod store;

use axum::{routing::get, Router};

pub use handler::AppState;
pub use model::Product;
pub use service::ProductService;
pub use store::{InMemoryProductStore, ProductRepository};

/// 产品资源的路由前缀
pub const PRODUCTS_PATH: &str = "/api/products";

/// 产品路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            PRODUCTS_PATH,
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/api/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
}
