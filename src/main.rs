//! Users CRUD 服务主入口

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use users_crud_rust::shared::constants;
use users_crud_rust::{create_routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 先加载 .env，使其中的 RUST_LOG 生效
    dotenv::dotenv().ok();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| constants::server::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 启动 Users CRUD 服务");

    // 加载配置
    let config = Config::load()?;
    if config.auth.using_default_api_key {
        warn!("⚠️ 未配置 API_KEY，正在使用内置默认密钥，请勿在生产环境中使用");
    }
    info!("✅ 配置加载成功，数据文件: {}", config.storage.users_file.display());

    let app = create_routes(AppState::from_config(&config));
    info!("✅ 路由创建成功");

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("🌐 服务器启动成功，监听地址: {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("🛑 接收到关闭信号，正在优雅关闭服务器...");
        })
        .await?;

    Ok(())
}
