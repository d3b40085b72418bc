//! 共享类型定义模块

/// 用户ID类型
pub type UserId = i64;
