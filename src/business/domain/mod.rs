//! 领域模型模块
//! 
//! 定义业务领域的核心实体和值对象

pub mod user;

pub use user::{User, UserCollection, UserDraft};
