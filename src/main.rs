use std::sync::Arc;

use product_api::app::products::{InMemoryProductStore, PRODUCTS_PATH};
use product_api::config::load_config;
use product_api::create_app;
use product_api::infrastructure::logger::Logger;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    config.validate()?;

    Logger::init(&config.logging);

    let store = Arc::new(InMemoryProductStore::new());
    info!("✅ 已初始化 {} 个示例产品", store.len());

    let app = create_app(store, &config.http);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 产品服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    {}       - 获取所有产品", PRODUCTS_PATH);
    info!("   POST   {}       - 创建产品", PRODUCTS_PATH);
    info!("   GET    {}/:id   - 获取特定产品", PRODUCTS_PATH);
    info!("   PUT    {}/:id   - 更新产品", PRODUCTS_PATH);
    info!("   DELETE {}/:id   - 删除产品", PRODUCTS_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl-C 信号: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("无法监听 SIGTERM 信号: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号，正在停止服务...");
}
