//! 认证模块
//!
//! 管理会话状态，与路由系统解耦。
//! 路由器通过注入的认证信号决定渲染哪个分支。

use leptos::prelude::*;

use crate::session::{Session, SessionStore, Token, TokenStore};
use crate::web::LocalStorage;

/// 会话上下文
///
/// `login` / `logout` 是会话唯一的写入口，通过 Context 在组件间共享。
pub struct SessionContext<S: TokenStore + Send + Sync + 'static = LocalStorage> {
    session: RwSignal<Session>,
    store: StoredValue<SessionStore<S>>,
}

impl<S: TokenStore + Send + Sync + 'static> Clone for SessionContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: TokenStore + Send + Sync + 'static> Copy for SessionContext<S> {}

impl<S: TokenStore + Send + Sync + 'static> SessionContext<S> {
    /// 创建上下文并从持久化存储恢复会话
    pub fn new(store: S) -> Self {
        let store = SessionStore::new(store);
        let session = RwSignal::new(store.initialize());
        Self {
            session,
            store: StoredValue::new(store),
        }
    }

    /// 会话状态（只读）
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    #[cfg(test)]
    pub fn is_authenticated(&self) -> bool {
        self.session.with_untracked(Session::is_authenticated)
    }

    pub fn token(&self) -> Option<Token> {
        self.session.with_untracked(|s| s.token().cloned())
    }

    /// 登录：持久化 Token 并切换到已认证
    pub fn login(&self, token: Token) {
        let next = self.store.with_value(|store| store.login(token));
        self.session.set(next);
    }

    /// 注销：清除持久化的 Token
    ///
    /// 路由器监听会话信号，已认证分支会随之卸载。
    pub fn logout(&self) {
        let next = self.store.with_value(|store| store.logout());
        self.session.set(next);
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
