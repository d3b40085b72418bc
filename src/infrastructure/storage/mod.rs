//! 用户存储模块
//!
//! 以整体读写的方式持久化用户集合。处理器只依赖 `UserStore` 接口，
//! 更换为带事务的存储实现时上层逻辑不变。

pub mod json_file;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::business::domain::UserCollection;

pub use json_file::JsonFileStore;

/// 存储错误类型
#[derive(Debug, Error)]
pub enum StoreError {
    /// 文件存在但内容不是预期结构的JSON
    #[error("存储文件已损坏: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// 读写失败（磁盘已满、权限不足等）
    #[error("存储文件读写失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 用户集合存储接口
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 只读地读取整个集合；存储不存在时返回空集合，但不创建存储
    async fn read(&self) -> Result<UserCollection, StoreError>;

    /// 读取整个集合；存储不存在时初始化为空集合
    ///
    /// 会写入存储，调用方需持有写锁。
    async fn load(&self) -> Result<UserCollection, StoreError>;

    /// 用给定集合整体覆盖存储
    async fn save(&self, collection: &UserCollection) -> Result<(), StoreError>;
}

/// 全局存储实例
pub type SharedUserStore = Arc<dyn UserStore>;
