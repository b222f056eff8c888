//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API：所有对 window.history 的操作都集中在此模块。
//! 当前路由由会话信号派生，不存在可以绕过守卫的导航入口。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use crate::session::Session;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 会话路由器
///
/// 根据会话渲染唯一的分支；会话变化时整棵子树被替换，
/// 分支内的控制器状态随之丢弃。
#[component]
pub fn SessionRouter(
    /// 会话状态信号
    session: ReadSignal<Session>,
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let route = Memo::new(move |_| session.with(AppRoute::for_session));

    // 地址栏与当前分支保持一致
    Effect::new(move |_| {
        let route = route.get();
        let path = current_path();
        if path != route.to_path() {
            log_info!("[Router] {} -> {}", path, route);
            replace_history_state(route.to_path());
        }
    });

    move || matcher(route.get())
}
