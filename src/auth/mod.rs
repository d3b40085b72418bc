//! 认证模块
//! 
//! 提供静态 API Key 校验和请求守卫中间件

pub mod api_key;
pub mod middleware;

// 重新导出常用类型
pub use api_key::ApiKey;
pub use middleware::api_key_guard;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("缺少API Key")]
    MissingApiKey,
    #[error("无效的API Key")]
    InvalidApiKey,
}
