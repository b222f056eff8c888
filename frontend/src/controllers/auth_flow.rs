//! 登录 / 注册流程
//!
//! 成功登录后写入 [`SessionContext`]；会话变化由路由器接管页面切换。

use leptos::prelude::*;
use shophub_shared::Credentials;

use super::required;
use crate::api::{ShopApi, Transport};
use crate::auth::SessionContext;
use crate::error::FormError;
use crate::session::{Token, TokenStore};

const MIN_PASSWORD_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Clone, Copy)]
pub struct CredentialsForm {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl CredentialsForm {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    pub fn to_credentials(&self) -> Result<Credentials, FormError> {
        let username = self.username.get_untracked();
        let password = self.password.get_untracked();
        required(&username)?;
        required(&password)?;
        Ok(Credentials { username, password })
    }
}

impl Default for CredentialsForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AuthFlow<S: TokenStore + Send + Sync + 'static, T: Transport> {
    api: ShopApi<T>,
    session: SessionContext<S>,
    pub form: CredentialsForm,
    pub mode: RwSignal<AuthMode>,
    pub error: RwSignal<Option<String>>,
    /// 注册成功等非错误提示
    pub notice: RwSignal<Option<String>>,
    pub pending: RwSignal<bool>,
}

impl<S: TokenStore + Send + Sync + 'static, T: Transport> Clone for AuthFlow<S, T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session,
            form: self.form,
            mode: self.mode,
            error: self.error,
            notice: self.notice,
            pending: self.pending,
        }
    }
}

impl<S: TokenStore + Send + Sync + 'static, T: Transport> AuthFlow<S, T> {
    pub fn new(api: ShopApi<T>, session: SessionContext<S>) -> Self {
        Self {
            api,
            session,
            form: CredentialsForm::new(),
            mode: RwSignal::new(AuthMode::Login),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            pending: RwSignal::new(false),
        }
    }

    /// 切换登录 / 注册，保留已输入的内容
    pub fn toggle_mode(&self) {
        self.mode.update(|mode| {
            *mode = match mode {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            }
        });
        self.error.set(None);
        self.notice.set(None);
    }

    pub fn clear_error(&self) {
        if self.error.with_untracked(Option::is_some) {
            self.error.set(None);
        }
    }

    /// 按当前模式提交；已有请求在途时忽略
    pub async fn submit(&self) {
        match self.mode.get_untracked() {
            AuthMode::Login => self.authenticate().await,
            AuthMode::Register => self.register().await,
        }
    }

    pub async fn authenticate(&self) {
        if self.pending.get_untracked() {
            return;
        }
        let credentials = match self.form.to_credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        self.pending.set(true);
        self.error.set(None);
        self.notice.set(None);

        match self.api.login(credentials).await {
            Ok(res) => match Token::new(res.access_token) {
                Some(token) => self.session.login(token),
                None => {
                    log_warn!("[Auth] Login response carried an empty token");
                    self.error.set(Some("Login failed".to_string()));
                }
            },
            Err(e) => {
                log_warn!("[Auth] Login failed: {}", e);
                self.error.set(Some(e.user_message("Login failed")));
            }
        }

        self.pending.set(false);
    }

    pub async fn register(&self) {
        if self.pending.get_untracked() {
            return;
        }
        let credentials = match self.form.to_credentials().and_then(|c| {
            if c.password.chars().count() < MIN_PASSWORD_LEN {
                Err(FormError::PasswordTooShort)
            } else {
                Ok(c)
            }
        }) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        self.pending.set(true);
        self.error.set(None);
        self.notice.set(None);

        match self.api.register(credentials).await {
            Ok(()) => {
                log_info!("[Auth] Registered new account");
                self.mode.set(AuthMode::Login);
                self.notice
                    .set(Some("Registration successful! Please login.".to_string()));
            }
            Err(e) => {
                log_warn!("[Auth] Registration failed: {}", e);
                self.error.set(Some(e.user_message("Registration failed")));
            }
        }

        self.pending.set(false);
    }
}
