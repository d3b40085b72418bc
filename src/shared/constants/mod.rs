//! 常量定义模块

/// 认证相关常量
pub mod auth {
    /// 携带API Key的请求头（axum 中 header 名称大小写不敏感）
    pub const API_KEY_HEADER: &str = "x-api-key";
    /// 未配置 API_KEY 时的回退密钥，仅用于本地开发
    pub const DEFAULT_API_KEY: &str = "defaultsecret";
    /// 认证失败时返回给客户端的固定信息
    pub const UNAUTHORIZED_DETAIL: &str = "Unauthorized (missing/invalid X-API-Key)";
}

/// 用户资源相关常量
pub mod users {
    /// 受 API Key 保护的资源路径
    pub const RESOURCE_PATH: &str = "/users";
    /// 新集合的起始ID
    pub const FIRST_USER_ID: i64 = 1;
    pub const NOT_FOUND_DETAIL: &str = "User not found";
}

/// 存储相关常量
pub mod storage {
    pub const DEFAULT_USERS_FILE: &str = "data_users.json";
}

/// 服务器相关常量
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_LOG_FILTER: &str = "users_crud_rust=info,tower_http=info";
}
