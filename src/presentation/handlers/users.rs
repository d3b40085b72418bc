//! 用户管理处理器
//! 
//! 处理用户CRUD操作

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use tracing::{info, instrument};

use crate::business::domain::{User, UserDraft};
use crate::presentation::routes::AppState;
use crate::shared::{AppResult, UserId};

/// 获取用户列表
#[instrument(skip(app_state))]
pub async fn list_users(State(app_state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    info!("📋 获取用户列表请求");

    let users = app_state.users.list().await?;

    info!("✅ 获取用户列表成功: {} 个用户", users.len());
    Ok(Json(users))
}

/// 获取单个用户
#[instrument(skip(app_state, path))]
pub async fn get_user(
    State(app_state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
) -> AppResult<Json<User>> {
    let Path(user_id) = path?;
    info!("🔍 获取用户请求: ID {}", user_id);

    let user = app_state.users.get(user_id).await?;
    Ok(Json(user))
}

/// 创建用户
///
/// 成功时返回 200 和带ID的用户。
#[instrument(skip(app_state, payload))]
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: Result<Json<UserDraft>, JsonRejection>,
) -> AppResult<Json<User>> {
    let Json(request) = payload?;
    info!("👤 创建用户请求: {}", request.email);

    let user = app_state.users.create(request).await?;
    Ok(Json(user))
}

/// 更新用户（整体替换）
#[instrument(skip(app_state, path, payload))]
pub async fn update_user(
    State(app_state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
    payload: Result<Json<UserDraft>, JsonRejection>,
) -> AppResult<Json<User>> {
    let Path(user_id) = path?;
    let Json(request) = payload?;
    info!("🔄 更新用户请求: ID {}", user_id);

    let user = app_state.users.update(user_id, request).await?;
    Ok(Json(user))
}

/// 删除用户
#[instrument(skip(app_state, path))]
pub async fn delete_user(
    State(app_state): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(user_id) = path?;
    info!("🗑️ 删除用户请求: ID {}", user_id);

    app_state.users.delete(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
