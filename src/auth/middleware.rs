//! 认证中间件模块

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use super::AuthError;
use crate::presentation::routes::AppState;
use crate::shared::{constants, AppError};

/// API Key 守卫中间件
///
/// 只拦截 `/users` 资源下的路径，校验失败时在访问存储之前直接返回 401。
pub async fn api_key_guard(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !is_guarded_path(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    check_api_key(request.headers(), &app_state)?;

    Ok(next.run(request).await)
}

fn check_api_key(headers: &HeaderMap, app_state: &AppState) -> Result<(), AuthError> {
    let provided = headers
        .get(constants::auth::API_KEY_HEADER)
        .ok_or(AuthError::MissingApiKey)?
        .to_str()
        .map_err(|_| AuthError::InvalidApiKey)?;

    if app_state.api_key.verify(provided) {
        Ok(())
    } else {
        Err(AuthError::InvalidApiKey)
    }
}

/// 判断路径是否属于受保护的用户资源
fn is_guarded_path(path: &str) -> bool {
    let resource = constants::users::RESOURCE_PATH;
    match path.strip_prefix(resource) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
