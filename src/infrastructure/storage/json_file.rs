//! JSON 文件存储实现

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{StoreError, UserStore};
use crate::business::domain::UserCollection;

/// 基于单个JSON文件的用户存储
///
/// 每次保存都重新序列化整个集合并覆盖文件；写入过程中崩溃可能导致文件损坏。
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 存储文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(bytes: &[u8]) -> Result<UserCollection, StoreError> {
        serde_json::from_slice(bytes).map_err(StoreError::Corrupt)
    }

    /// 单次读取并解析文件，文件不存在时返回 None，不产生任何写入
    async fn read_file(&self) -> Result<Option<UserCollection>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let mut collection = Self::parse(&bytes).map_err(|e| {
            warn!("⚠️ 存储文件解析失败 {}: {}", self.path.display(), e);
            e
        })?;

        if collection.repair_next_id() {
            warn!(
                "⚠️ 存储文件中的 next_id 不大于现有ID，已调整为 {}: {}",
                collection.next_id,
                self.path.display()
            );
        }

        debug!("读取用户集合: {} 个用户", collection.users.len());
        Ok(Some(collection))
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn read(&self) -> Result<UserCollection, StoreError> {
        Ok(self.read_file().await?.unwrap_or_default())
    }

    async fn load(&self) -> Result<UserCollection, StoreError> {
        if let Some(collection) = self.read_file().await? {
            return Ok(collection);
        }

        info!("📁 存储文件不存在，初始化空集合: {}", self.path.display());
        let collection = UserCollection::default();
        self.save(&collection).await?;
        Ok(collection)
    }

    async fn save(&self, collection: &UserCollection) -> Result<(), StoreError> {
        let content = serde_json::to_vec_pretty(collection)
            .map_err(|e| StoreError::Io(std::io::Error::new(ErrorKind::InvalidData, e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, content).await?;
        debug!("保存用户集合: {} 个用户", collection.users.len());
        Ok(())
    }
}
