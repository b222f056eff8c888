//! 资源视图控制器
//!
//! 每个控制器独占自己的信号状态，只通过 [`crate::api::ShopApi`] 与后端交互。
//! 组件层负责把操作放进 `spawn_local`，控制器本身保持可在原生测试中直接 `await`。

pub mod auth_flow;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod stock;


use std::future::Future;

use leptos::prelude::*;

use crate::error::{ApiError, FormError};
use crate::sync::ResourceState;

/// 变更操作的用户反馈
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn message(&self) -> &str {
        match self {
            Feedback::Success(msg) | Feedback::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Error(_))
    }
}

/// 领取票号、等待请求、按票号写回结果
///
/// 失败时写入 `fallback`（或服务端 detail），已显示的数据保持不变。
pub(crate) async fn fetch_into<T, F>(
    state: RwSignal<ResourceState<T>>,
    tag: &str,
    fallback: &str,
    request: F,
) where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    // 控制器已随组件卸载
    let Some(ticket) = state.try_update(|s| s.begin_load()) else {
        return;
    };

    let result = request.await.map_err(|e| {
        log_error!("[{}] {}: {}", tag, fallback, e);
        e.user_message(fallback)
    });

    match state.try_update(|s| s.finish_load(ticket, result)) {
        Some(true) => {}
        Some(false) => log_info!("[{}] Discarded stale response", tag),
        None => {}
    }
}

/// 去掉首尾空白后为空视为未填写
pub(crate) fn required(value: &str) -> Result<&str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::MissingFields)
    } else {
        Ok(value)
    }
}

pub(crate) fn parse_int(value: &str, field: &'static str) -> Result<i64, FormError> {
    value
        .parse::<i64>()
        .map_err(|_| FormError::NotAnInteger { field })
}
