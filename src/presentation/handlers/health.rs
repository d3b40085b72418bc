//! 健康检查处理器

use axum::response::Json;
use tracing::{debug, instrument};

/// 基础健康检查
#[instrument]
pub async fn health_check() -> Json<serde_json::Value> {
    debug!("🏥 基础健康检查请求");

    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
