//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 页面完全由会话状态决定：未认证只能看到登录页，已认证只能看到控制面板。

use std::fmt::Display;

use crate::session::Session;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 控制面板 (需要认证)
    Dashboard,
}

impl AppRoute {
    /// **核心守卫逻辑：会话 -> 页面**
    pub fn for_session(session: &Session) -> Self {
        if session.is_authenticated() {
            Self::Dashboard
        } else {
            Self::Login
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
