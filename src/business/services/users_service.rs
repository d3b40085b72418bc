use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::{
    business::domain::{User, UserDraft},
    infrastructure::storage::SharedUserStore,
    shared::error::{AppError, AppResult},
    shared::UserId,
};

/// 用户管理服务
///
/// 读取操作只读地访问存储，不会创建或覆盖文件；创建、更新、删除在同一把进程级互斥锁下完成
/// “读取-修改-保存”整个周期，避免并发写入互相覆盖。
pub struct UsersService {
    store: SharedUserStore,
    write_lock: Mutex<()>,
}

impl UsersService {
    /// 创建新的用户服务实例
    pub fn new(store: SharedUserStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// 获取全部用户，按插入顺序
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let collection = self.store.read().await?;
        Ok(collection.users)
    }

    /// 按ID获取用户
    pub async fn get(&self, id: UserId) -> AppResult<User> {
        let collection = self.store.read().await?;
        collection
            .find(id)
            .cloned()
            .ok_or_else(AppError::user_not_found)
    }

    /// 创建用户并分配新ID
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: UserDraft) -> AppResult<User> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.store.load().await?;
        let user = collection
            .insert(draft)
            .ok_or_else(|| AppError::Internal("用户ID已耗尽".to_string()))?;
        self.store.save(&collection).await?;

        info!("✅ 用户创建成功: {} (ID: {})", user.name, user.id);
        Ok(user)
    }

    /// 整体替换用户信息，ID不变
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: UserId, draft: UserDraft) -> AppResult<User> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.store.load().await?;
        let user = collection
            .replace(id, draft)
            .ok_or_else(AppError::user_not_found)?;
        self.store.save(&collection).await?;

        info!("✅ 用户更新成功: {} (ID: {})", user.name, user.id);
        Ok(user)
    }

    /// 删除用户
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.store.load().await?;
        let user = collection.remove(id).ok_or_else(AppError::user_not_found)?;
        self.store.save(&collection).await?;

        info!("✅ 用户删除成功: {} (ID: {})", user.name, user.id);
        Ok(())
    }
}

/// 全局用户服务实例
pub type SharedUsersService = Arc<UsersService>;
