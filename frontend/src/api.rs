//! API 网关客户端
//!
//! 所有对后端的请求都经过 [`ShopApi::send`]：
//! 拼接 URL、注入 Bearer Token、按端点声明编码请求体，
//! 并把传输错误 / 非 2xx 响应统一转换为 [`ApiError`]。

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shophub_shared::AUTHORIZATION_HEADER;
use shophub_shared::protocol::{
    ApiRequest, BodyEncoding, DashboardSummaryRequest, HttpMethod, ListOrdersRequest,
    ListProductsRequest, ListStockLogsRequest, LoginRequest, RegisterRequest,
};
use shophub_shared::{
    CreateOrderRequest, Credentials, DashboardSummary, LoginResponse, Order, OrderPlaced, Product,
    StockChangeRequest, StockLogEntry, StockUpdated,
};

use crate::error::ApiError;
use crate::session::Token;
use crate::web::{FetchTransport, HttpError};

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
mod tests;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    #[cfg(test)]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP 传输层特性 (Trait)
///
/// (?Send) 是因为浏览器环境下的 Future 不是 Send 的
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError>;
}

// =========================================================
// 网关客户端
// =========================================================

/// 生产环境使用的客户端类型
pub type AppApi = ShopApi<FetchTransport>;

#[derive(Debug)]
pub struct ShopApi<T: Transport> {
    base_url: String,
    token: Option<Token>,
    transport: Arc<T>,
}

impl<T: Transport> Clone for ShopApi<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> ShopApi<T> {
    pub fn new(base_url: &str, token: Option<Token>, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            transport: Arc::new(transport),
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn build<R: ApiRequest>(&self, req: &R) -> Result<HttpRequest, ApiError> {
        let mut http = HttpRequest::new(&self.url(R::PATH), R::METHOD)
            .with_header("Accept", "application/json");

        if R::AUTHORIZED {
            if let Some(token) = &self.token {
                http = http.with_header(AUTHORIZATION_HEADER, &format!("Bearer {}", token.as_str()));
            }
        }

        match R::ENCODING {
            BodyEncoding::None => {}
            BodyEncoding::Json => {
                let body =
                    serde_json::to_string(req).map_err(|e| ApiError::Encode(e.to_string()))?;
                http = http
                    .with_header("Content-Type", "application/json")
                    .with_body(body);
            }
            BodyEncoding::Form => {
                http = http
                    .with_header("Content-Type", "application/x-www-form-urlencoded")
                    .with_body(encode_form(req)?);
            }
        }

        Ok(http)
    }

    /// 发送一个端点请求并解析响应
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let http = self.build(req)?;
        let res = self.transport.send(http).await?;

        if !res.ok() {
            return Err(ApiError::Status {
                status: res.status,
                detail: extract_detail(&res.body),
            });
        }

        if R::IGNORE_BODY {
            return parse_body("");
        }
        parse_body(&res.body)
    }

    // --- 端点 ---

    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, ApiError> {
        self.send(&LoginRequest(credentials)).await
    }

    pub async fn register(&self, credentials: Credentials) -> Result<(), ApiError> {
        self.send(&RegisterRequest(credentials)).await.map(|_| ())
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.send(&DashboardSummaryRequest).await
    }

    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.send(&ListProductsRequest)
            .await
            .map(|list| list.into_products())
    }

    pub async fn place_order(&self, order: &CreateOrderRequest) -> Result<OrderPlaced, ApiError> {
        self.send(order).await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        self.send(&ListOrdersRequest).await
    }

    pub async fn update_stock(&self, change: &StockChangeRequest) -> Result<StockUpdated, ApiError> {
        self.send(change).await
    }

    pub async fn stock_logs(&self) -> Result<Vec<StockLogEntry>, ApiError> {
        self.send(&ListStockLogsRequest).await
    }
}

// =========================================================
// 编解码辅助
// =========================================================

fn parse_body<D: DeserializeOwned>(body: &str) -> Result<D, ApiError> {
    // 空响应体按 JSON null 处理
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// 把扁平结构编码为 `application/x-www-form-urlencoded`
fn encode_form<S: Serialize>(value: &S) -> Result<String, ApiError> {
    let serde_json::Value::Object(fields) =
        serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))?
    else {
        return Err(ApiError::Encode("form body must be a flat object".to_string()));
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let value = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Null => continue,
            _ => return Err(ApiError::Encode(format!("field `{key}` is not a scalar"))),
        };
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(&key),
            urlencoding::encode(&value)
        ));
    }
    Ok(pairs.join("&"))
}

/// 提取 FastAPI 风格的错误说明
///
/// - `{"detail": "text"}` -> `text`
/// - `{"detail": [{"msg": "text", ...}]}` -> 第一条 `msg`
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => items
            .first()?
            .get("msg")?
            .as_str()
            .map(str::to_string),
        _ => None,
    }
}
