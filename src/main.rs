use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use product_catalog::infrastructure::{
    config::{Config, DEFAULT_CONFIG_PATH},
    logger::Logger,
};
use product_catalog::{create_router, AppState, CatalogService, ProductStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_or_default(DEFAULT_CONFIG_PATH)
        .with_context(|| format!("加载配置失败: {DEFAULT_CONFIG_PATH}"))?;
    Logger::init(&config.logging.level);

    let store = ProductStore::seeded();
    info!("✅ 已初始化 {} 个示例产品", store.size());

    let state = AppState::new(CatalogService::new(store));
    let app = create_router(state, config.http.request_timeout());

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {addr}"))?;

    info!("🚀 产品目录服务运行在 http://{}", addr);
    info!("   POST /api/products        - 创建产品");
    info!("   GET  /api/products?id=ID  - 查询产品");
    info!("   GET  /api/products/error  - 触发通用错误");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已关闭");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "无法监听关闭信号");
        std::future::pending::<()>().await;
    }
}
