//! 用户领域模型
//!
//! 用户集合在内存中的表示，以及ID分配、更新、删除等集合操作

use serde::{Deserialize, Serialize};

use crate::shared::constants::users::FIRST_USER_ID;
use crate::shared::UserId;

/// 用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// 不带ID的用户数据，用于创建和整体替换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserDraft {
    fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            roles: self.roles,
        }
    }
}

fn default_next_id() -> UserId {
    FIRST_USER_ID
}

/// 用户集合
///
/// `users` 保持插入顺序；`next_id` 始终大于集合中所有ID，删除后的ID不会被复用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCollection {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default = "default_next_id")]
    pub next_id: UserId,
}

impl Default for UserCollection {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: FIRST_USER_ID,
        }
    }
}

impl UserCollection {
    /// 按ID查找用户
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// 追加新用户并分配ID，ID耗尽时返回 None
    pub fn insert(&mut self, draft: UserDraft) -> Option<User> {
        let id = self.next_id;
        let next_id = id.checked_add(1)?;

        let user = draft.into_user(id);
        self.users.push(user.clone());
        self.next_id = next_id;
        Some(user)
    }

    /// 整体替换除ID以外的字段，位置不变
    pub fn replace(&mut self, id: UserId, draft: UserDraft) -> Option<User> {
        let slot = self.users.iter_mut().find(|user| user.id == id)?;
        *slot = draft.into_user(id);
        Some(slot.clone())
    }

    /// 删除用户，其余用户顺序不变
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.users.iter().position(|user| user.id == id)?;
        Some(self.users.remove(index))
    }

    /// 修复 `next_id` 不大于现有最大ID的集合
    ///
    /// 返回是否做了调整。
    pub fn repair_next_id(&mut self) -> bool {
        let floor = self
            .users
            .iter()
            .map(|user| user.id.saturating_add(1))
            .max()
            .unwrap_or(FIRST_USER_ID)
            .max(FIRST_USER_ID);

        if self.next_id < floor {
            self.next_id = floor;
            true
        } else {
            false
        }
    }
}
