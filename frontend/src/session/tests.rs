use super::*;
use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// 内存中的持久化存储，可模拟写入失败
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStore {
    pub(crate) fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(TOKEN_STORAGE_KEY, token);
        store
    }

    fn read_only() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl TokenStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> bool {
        if self.read_only {
            return false;
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.lock().unwrap().remove(key);
        true
    }
}

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    exp: i64,
}

pub(crate) fn signed_token(sub: &str) -> Token {
    // 过期时间设在过去：显示名不依赖过期校验
    let raw = jsonwebtoken::encode(
        &Header::default(),
        &TestClaims { sub, exp: 1 },
        &EncodingKey::from_secret(b"server-secret"),
    )
    .unwrap();
    Token::new(raw).unwrap()
}

// =========================================================
// Token / Session
// =========================================================

#[test]
fn test_blank_token_is_rejected() {
    assert!(Token::new("").is_none());
    assert!(Token::new("   ").is_none());
    assert_eq!(Token::new("abc").unwrap().as_str(), "abc");
}

#[test]
fn test_session_from_stored_value() {
    assert_eq!(Session::from_stored(None), Session::Unauthenticated);
    assert_eq!(Session::from_stored(Some(String::new())), Session::Unauthenticated);
    let session = Session::from_stored(Some("t".into()));
    assert!(session.is_authenticated());
    assert_eq!(session.token().unwrap().as_str(), "t");
}

// =========================================================
// SessionStore
// =========================================================

#[test]
fn test_initialize_without_persisted_token() {
    let store = SessionStore::new(MemoryStore::default());
    assert_eq!(store.initialize(), Session::Unauthenticated);
}

#[test]
fn test_initialize_restores_persisted_token() {
    let store = SessionStore::new(MemoryStore::with_token("persisted"));
    assert_eq!(
        store.initialize(),
        Session::Authenticated(Token::new("persisted").unwrap())
    );
}

#[test]
fn test_login_then_logout() {
    let memory = MemoryStore::default();
    let store = SessionStore::new(memory.clone());
    let token = Token::new("t-123").unwrap();

    let session = store.login(token.clone());
    assert_eq!(session, Session::Authenticated(token));
    assert_eq!(memory.get(TOKEN_STORAGE_KEY).as_deref(), Some("t-123"));

    let session = store.logout();
    assert_eq!(session, Session::Unauthenticated);
    assert_eq!(memory.get(TOKEN_STORAGE_KEY), None);
    assert_eq!(store.initialize(), Session::Unauthenticated);
}

#[test]
fn test_login_survives_persist_failure() {
    let store = SessionStore::new(MemoryStore::read_only());
    let session = store.login(Token::new("t").unwrap());
    assert!(session.is_authenticated());
    // 未写入，重新加载后是匿名的
    assert_eq!(store.initialize(), Session::Unauthenticated);
}

// =========================================================
// Claims
// =========================================================

#[test]
fn test_display_name_from_signed_token() {
    let session = Session::Authenticated(signed_token("alice"));
    assert_eq!(display_name(&session), "alice");
}

#[test]
fn test_decode_claims_reads_expiry() {
    let claims = decode_claims(&signed_token("bob")).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("bob"));
    assert_eq!(claims.exp, Some(1));
}

#[test]
fn test_display_name_falls_back_for_garbage() {
    let session = Session::Authenticated(Token::new("not-a-jwt").unwrap());
    assert!(decode_claims(session.token().unwrap()).is_err());
    assert_eq!(display_name(&session), DEFAULT_DISPLAY_NAME);
}

#[test]
fn test_display_name_when_anonymous() {
    assert_eq!(display_name(&Session::Unauthenticated), DEFAULT_DISPLAY_NAME);
}
