//! 统一错误处理模块
//!
//! 定义系统中所有错误类型，提供统一的错误处理机制

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::infrastructure::storage::StoreError;
use crate::shared::constants;

/// 应用程序统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 认证相关错误
    #[error("认证错误: {0}")]
    Authentication(#[from] AuthError),

    /// 请求体或路径参数验证错误
    #[error("验证错误: {0}")]
    Validation(String),

    /// 资源未找到错误
    #[error("资源未找到: {0}")]
    NotFound(String),

    /// 存储相关错误
    #[error("存储错误: {0}")]
    Store(#[from] StoreError),

    /// 内部服务器错误
    #[error("内部错误: {0}")]
    Internal(String),
}

impl AppError {
    /// 获取HTTP状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 获取错误代码
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Authentication(_) => "UNAUTHORIZED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Store(StoreError::Corrupt(_)) => "CORRUPT_STORE",
            AppError::Store(StoreError::Io(_)) => "IO_FAILURE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 返回给客户端的信息
    ///
    /// 服务端错误只返回概括信息，文件路径和解析细节仅写入日志。
    pub fn detail(&self) -> String {
        match self {
            AppError::Authentication(_) => constants::auth::UNAUTHORIZED_DETAIL.to_string(),
            AppError::Validation(message) => message.clone(),
            AppError::NotFound(message) => message.clone(),
            AppError::Store(StoreError::Corrupt(_)) => "User store is corrupted".to_string(),
            AppError::Store(StoreError::Io(_)) => "User store is unavailable".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    pub fn user_not_found() -> Self {
        AppError::NotFound(constants::users::NOT_FOUND_DETAIL.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_code = self.error_code();

        if status_code.is_server_error() {
            tracing::error!(
                status = ?status_code,
                error_code = error_code,
                error = %self,
                "处理请求时发生错误"
            );
        } else {
            tracing::warn!(
                status = ?status_code,
                error_code = error_code,
                error = %self,
                "请求被拒绝"
            );
        }

        let detail = self.detail();
        let body = Json(json!({
            "detail": detail,
            "error": {
                "code": error_code,
                "message": detail,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        }));

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
