//! 业务服务模块
//! 
//! 实现核心业务逻辑和服务编排

pub mod users_service;

pub use users_service::{SharedUsersService, UsersService};
