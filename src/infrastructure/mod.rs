//! 基础设施层模块
//! 
//! 负责数据持久化、配置管理等基础设施相关功能

pub mod config;
pub mod storage;

// 重新导出常用类型
pub use config::Config;
pub use storage::{JsonFileStore, SharedUserStore, StoreError, UserStore};
