//! 核心错误处理模块

use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// 核心错误类型
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// 未归类的错误，细节只写日志
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_code, user_message, details) = match self {
            CoreError::Validation(details) => {
                warn!(?details, "请求校验失败");
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Request validation failed".to_string(),
                    details,
                )
            }
            CoreError::BadRequest(msg) => {
                warn!(%msg, "无效请求");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, Vec::new())
            }
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, Vec::new()),
            CoreError::Internal(err) => {
                error!(error = ?err, "未处理的内部错误");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "An unexpected error occurred".to_string(),
                    Vec::new(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            details,
        };

        (status, axum::Json(error_response)).into_response()
    }
}

/// 处理器 panic 时的响应，与未归类错误保持同一格式
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    CoreError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
