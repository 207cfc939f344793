//! HTTP Error Handling

use axum::{
    extract::rejection::{BytesRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// 统一错误响应格式
///
/// `code` 与 HTTP 状态码一致
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: i64,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: i64::from(code.as_u16()),
            message: message.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 缺少条目等请求错误
    BadRequest(String),
    /// 条目不存在
    NotFound(String),
    /// 请求体无法解析或未通过校验
    Unprocessable(String),
    /// 请求体超过大小上限
    PayloadTooLarge(String),
    /// 内部错误
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::PayloadTooLarge(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.message();

        match &self {
            ApiError::Internal(_) => {
                tracing::error!(code = status.as_u16(), error = %msg, "Internal server error");
            }
            ApiError::NotFound(_) => {
                tracing::warn!(code = status.as_u16(), error = %msg, "Resource not found");
            }
            ApiError::BadRequest(_) | ApiError::Unprocessable(_) | ApiError::PayloadTooLarge(_) => {
                tracing::warn!(code = status.as_u16(), error = %msg, "Bad request");
            }
        }

        (status, Json(ErrorResponse::new(status, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::InvalidInput(_) => ApiError::BadRequest(e.to_string()),
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::InternalError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

// ============================================================================
// 提取器拒绝 -> ApiError，保证所有错误响应都是 {code, message}
// ============================================================================

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(e: BytesRejection) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(e.body_text())
        } else {
            ApiError::BadRequest(e.body_text())
        }
    }
}
