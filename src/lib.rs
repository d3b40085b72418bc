//! Users CRUD 服务
//! 
//! 基于JSON文件持久化、以 API Key 保护的用户管理服务，采用三层架构设计

// 核心模块
pub mod shared;          // 共享模块（错误处理、类型定义、常量）
pub mod infrastructure;  // 基础设施层（文件存储、配置）
pub mod business;        // 业务逻辑层（领域模型、用户服务）
pub mod presentation;    // 表示层（HTTP处理、路由）
pub mod auth;            // API Key 认证

// 重新导出核心类型
pub use infrastructure::Config;
pub use shared::{AppError, AppResult};
pub use presentation::{create_routes, AppState};
