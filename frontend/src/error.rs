//! 错误类型
//!
//! - `ApiError`: API 网关统一的失败形态（传输 / 状态码 / 解析）
//! - `FormError`: 发请求之前就能发现的输入校验错误
//! - `TokenError`: Token 解码失败

use thiserror::Error;

use crate::web::HttpError;

/// Errors surfaced by [`crate::api::ShopApi`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 网络或传输层失败
    #[error("transport error: {0}")]
    Transport(String),

    /// 非 2xx 响应，`detail` 为服务端提供的说明
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// 响应体与预期结构不符
    #[error("unexpected response: {0}")]
    Parse(String),

    /// 请求体序列化失败
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// 服务端提供的错误说明（如果有）
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => Some(detail),
            _ => None,
        }
    }

    /// 面向用户的错误消息：优先使用服务端 detail，否则使用 fallback
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Validation errors, detected before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill all fields")]
    MissingFields,

    #[error("Password must be at least 3 characters")]
    PasswordTooShort,

    #[error("{field} must be a whole number")]
    NotAnInteger { field: &'static str },
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Malformed(#[from] jsonwebtoken::errors::Error),
}
