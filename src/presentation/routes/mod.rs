//! 路由配置模块
//!
//! 组织和配置所有HTTP路由

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{api_key_guard, ApiKey};
use crate::business::services::{SharedUsersService, UsersService};
use crate::infrastructure::{Config, JsonFileStore, SharedUserStore};
use crate::presentation::handlers;

/// 处理器共享状态
///
/// 启动时显式构建后传入路由，测试可以各自创建互相隔离的实例。
#[derive(Clone)]
pub struct AppState {
    pub users: SharedUsersService,
    pub api_key: ApiKey,
}

impl AppState {
    pub fn new(store: SharedUserStore, api_key: ApiKey) -> Self {
        Self {
            users: Arc::new(UsersService::new(store)),
            api_key,
        }
    }

    /// 按配置创建基于JSON文件存储的状态
    pub fn from_config(config: &Config) -> Self {
        let store: SharedUserStore = Arc::new(JsonFileStore::new(&config.storage.users_file));
        Self::new(store, ApiKey::new(&config.auth.api_key))
    }
}

/// 创建应用路由
pub fn create_routes(app_state: AppState) -> Router {
    // 用户资源路由（需要API Key）
    let user_routes = Router::new()
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/users/:id",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        );

    // 公开路由
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        // 守卫放在最外层，未匹配的 /users 子路径同样需要认证
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            api_key_guard,
        ))
        .with_state(app_state)
        // 全局中间件
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
