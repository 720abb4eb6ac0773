use product_catalog::core::error::ServerError;
use product_catalog::infrastructure::{config::load_config, logger::Logger};
use product_catalog::{build_router, AppState, CatalogHandle, CatalogStore};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = load_config()?;
    Logger::init(&config.logging)?;

    info!("启动产品目录服务...");

    let store = if config.catalog.seed {
        CatalogStore::seeded(config.catalog.id_policy)
    } else {
        CatalogStore::new(config.catalog.id_policy)
    };
    info!(
        "✅ 已载入 {} 个产品，id 策略: {:?}",
        store.len(),
        store.id_policy()
    );

    let state = AppState::new(CatalogHandle::new(store));
    let app = build_router(state, &config.http);

    let address = config.http.socket_address();
    let listener = TcpListener::bind(&address).await?;

    info!("🚀 Server ready at: http://{}/", listener.local_addr()?);
    info!("📖 端点:");
    info!("   POST /graphql  - GraphQL 查询与变更");
    info!("   GET  /graphql  - GraphiQL");
    info!("   GET  /health   - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C 信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到停止信号，正在关闭...");
}
