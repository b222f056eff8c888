//! 会话存储
//!
//! 纯粹的状态 / 存储管理，不发起任何网络请求。
//! Token 的持久化通过 [`TokenStore`] 抽象，浏览器下由 LocalStorage 实现。

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use shophub_shared::{DEFAULT_DISPLAY_NAME, TOKEN_STORAGE_KEY};

use crate::error::TokenError;

#[cfg(test)]
pub(crate) mod tests;

/// 非空的 Bearer Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// 空字符串（含纯空白）不是合法 Token
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 客户端对 "是否持有有效凭据" 的认知
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(Token),
}

impl Session {
    pub fn from_stored(raw: Option<String>) -> Self {
        raw.and_then(Token::new)
            .map_or(Session::Unauthenticated, Session::Authenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            Session::Authenticated(token) => Some(token),
            Session::Unauthenticated => None,
        }
    }
}

/// 持久化键值存储
pub trait TokenStore {
    fn load(&self, key: &str) -> Option<String>;
    /// 返回是否写入成功
    fn save(&self, key: &str, value: &str) -> bool;
    /// 返回是否删除成功
    fn remove(&self, key: &str) -> bool;
}

/// Session Store：登录时持久化，注销时清除，启动时加载
#[derive(Debug, Clone, Copy)]
pub struct SessionStore<S: TokenStore> {
    store: S,
    key: &'static str,
}

impl<S: TokenStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: TOKEN_STORAGE_KEY,
        }
    }

    /// 读取持久化的 Token（不存在也可以）
    pub fn initialize(&self) -> Session {
        let session = Session::from_stored(self.store.load(self.key));
        log_info!(
            "[Session] Initialized: {}",
            if session.is_authenticated() { "authenticated" } else { "anonymous" }
        );
        session
    }

    pub fn login(&self, token: Token) -> Session {
        if !self.store.save(self.key, token.as_str()) {
            // 写入失败时仅在本页面生命周期内保持登录
            log_warn!("[Session] Failed to persist token; session will not survive a reload");
        }
        log_info!("[Session] Logged in");
        Session::Authenticated(token)
    }

    pub fn logout(&self) -> Session {
        if !self.store.remove(self.key) {
            log_warn!("[Session] Failed to remove persisted token");
        }
        log_info!("[Session] Logged out");
        Session::Unauthenticated
    }
}

// =========================================================
// Token 载荷
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// 解码 JWT 载荷
///
/// 客户端没有签名密钥，签名与过期时间由服务端校验；这里只读取展示用的声明。
pub fn decode_claims(token: &Token) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<Claims>(
        token.as_str(),
        &DecodingKey::from_secret(&[]),
        &validation,
    )?;
    Ok(data.claims)
}

/// 顶栏显示的用户名；任何解码失败都回退到默认值
pub fn display_name(session: &Session) -> String {
    session
        .token()
        .and_then(|token| match decode_claims(token) {
            Ok(claims) => claims.sub.filter(|s| !s.is_empty()),
            Err(e) => {
                log_warn!("[Session] {}", e);
                None
            }
        })
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string())
}
