//! # 产品 CRUD 服务
//!
//! 以内存集合为存储的单资源 REST 服务，分层如下：
//! - `app`：产品模型、存储、服务与处理器
//! - `core`：错误类型、结果到响应的映射、请求日志中间件
//! - `infrastructure`：日志初始化
//! - `config`：TOML 配置加载与校验

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::products::{self, AppState, ProductRepository, ProductService};
use crate::config::HttpConfig;
use crate::core::middleware::request_logging_middleware;

/// 组装完整的应用路由
pub fn create_app(repository: Arc<dyn ProductRepository>, http: &HttpConfig) -> Router {
    let state = AppState {
        product_service: ProductService::new(repository),
    };

    products::routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
