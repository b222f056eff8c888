//! 测试工具: MockTransport
//!
//! 按 "METHOD path" 预置响应，并记录所有发出的请求。
//! `gate` 可以让某次请求挂起，直到测试显式放行，用于构造乱序完成的场景。

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use futures::channel::oneshot;
use shophub_shared::protocol::HttpMethod;

use super::{HttpRequest, HttpResponse, ShopApi, Transport};
use crate::session::Token;
use crate::web::HttpError;

pub const BASE_URL: &str = "http://shop.test";

fn key(method: HttpMethod, path: &str) -> String {
    format!("{} {}", method.as_str(), path)
}

#[derive(Default)]
pub struct MockTransport {
    // (METHOD path) -> 响应队列；只剩最后一个时重复使用
    responses: RefCell<HashMap<String, VecDeque<Result<(u16, String), HttpError>>>>,
    gates: RefCell<HashMap<String, VecDeque<oneshot::Receiver<()>>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock_response(&self, method: HttpMethod, path: &str, status: u16, body: serde_json::Value) {
        self.push(method, path, Ok((status, body.to_string())));
    }

    pub fn mock_raw(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok((status, body.to_string())));
    }

    pub fn mock_network_error(&self, method: HttpMethod, path: &str) {
        self.push(
            method,
            path,
            Err(HttpError::NetworkError("connection refused".to_string())),
        );
    }

    fn push(&self, method: HttpMethod, path: &str, response: Result<(u16, String), HttpError>) {
        self.responses
            .borrow_mut()
            .entry(key(method, path))
            .or_default()
            .push_back(response);
    }

    /// 让下一次匹配的请求挂起，直到返回的 Sender 被触发
    pub fn gate(&self, method: HttpMethod, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .borrow_mut()
            .entry(key(method, path))
            .or_default()
            .push_back(rx);
        tx
    }

    /// 已发出的请求，格式 "METHOD path"
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| key(r.method, r.url.trim_start_matches(BASE_URL)))
            .collect()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        let wanted = key(method, path);
        self.calls().iter().filter(|c| **c == wanted).count()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let k = key(req.method, req.url.trim_start_matches(BASE_URL));
        self.requests.borrow_mut().push(req);

        // 响应在发出请求时就确定，与完成顺序无关
        let response = {
            let mut responses = self.responses.borrow_mut();
            match responses.get_mut(&k) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };
        let gate = self.gates.borrow_mut().get_mut(&k).and_then(|q| q.pop_front());

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        match response {
            Some(Ok((status, body))) => Ok(HttpResponse { status, body }),
            Some(Err(e)) => Err(e),
            None => Ok(HttpResponse {
                status: 404,
                body: r#"{"detail":"Not Found"}"#.to_string(),
            }),
        }
    }
}

pub fn test_token() -> Token {
    Token::new("header.payload.signature").expect("non-empty token")
}

/// 已认证的测试客户端
pub fn mock_api() -> ShopApi<MockTransport> {
    ShopApi::new(BASE_URL, Some(test_token()), MockTransport::new())
}

/// 未认证的测试客户端（登录 / 注册）
pub fn anonymous_api() -> ShopApi<MockTransport> {
    ShopApi::new(BASE_URL, None, MockTransport::new())
}
