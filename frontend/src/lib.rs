//! ShopHub 管理端前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `session` / `auth`: 会话存储与会话上下文
//! - `api`: API 网关客户端
//! - `sync` / `controllers`: 资源状态机与各面板的控制器
//! - `web::route` / `web::router`: 由会话驱动的根路由
//! - `components`: UI 组件层

#[macro_use]
mod logging;

mod api;
mod auth;
mod config;
mod controllers;
mod error;
mod session;
mod sync;
mod components {
    pub mod dashboard;
    pub mod login;
    pub mod orders;
    pub mod products;
    pub mod stock;
}

use crate::auth::SessionContext;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::config::AppConfig;
use crate::web::LocalStorage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::{FetchTransport, HttpError};
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::SessionRouter;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 运行配置
    let config = AppConfig::from_build_env();
    log_info!("[App] API base URL: {}", config.api_base_url);
    provide_context(config);

    // 2. 创建会话上下文（从 LocalStorage 恢复 Token）
    let session = SessionContext::new(LocalStorage);
    provide_context(session);

    // 3. 路由器只依赖会话信号
    view! {
        <SessionRouter session=session.session() matcher=route_matcher />
    }
}
