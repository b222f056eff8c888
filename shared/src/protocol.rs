use crate::{
    CreateOrderRequest, Credentials, DashboardSummary, LoginResponse, Order, OrderPlaced, Product,
    StockChangeRequest, StockLogEntry, StockUpdated,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// How the request value is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// No body (GET endpoints).
    None,
    Json,
    /// `application/x-www-form-urlencoded`, used by the OAuth2 password login.
    Form,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Body encoding.
    const ENCODING: BodyEncoding;
    /// Whether the bearer token must be attached.
    const AUTHORIZED: bool = true;
    /// Whether any 2xx body counts as success without being parsed.
    const IGNORE_BODY: bool = false;
}

// =========================================================
// Request Definitions
// =========================================================

/// Exchange credentials for a bearer token
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: BodyEncoding = BodyEncoding::Form;
    const AUTHORIZED: bool = false;
}

/// Create an account. The response body carries nothing we need.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RegisterRequest(pub Credentials);

impl ApiRequest for RegisterRequest {
    type Response = IgnoredAny;
    const PATH: &'static str = "/register";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: BodyEncoding = BodyEncoding::Json;
    const AUTHORIZED: bool = false;
    const IGNORE_BODY: bool = true;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardSummaryRequest;

impl ApiRequest for DashboardSummaryRequest {
    type Response = DashboardSummary;
    const PATH: &'static str = "/dashboard/summary";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: BodyEncoding = BodyEncoding::None;
}

/// List all products
#[derive(Debug, Serialize, Deserialize)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Response = ProductList;
    const PATH: &'static str = "/products";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: BodyEncoding = BodyEncoding::None;
}

/// Accepted shapes of the product list response.
///
/// Anything that is neither a bare array nor a `{ "data": [...] }`
/// envelope fails to deserialize.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProductList {
    Bare(Vec<Product>),
    Envelope { data: Vec<Product> },
}

impl ProductList {
    pub fn into_products(self) -> Vec<Product> {
        match self {
            ProductList::Bare(products) => products,
            ProductList::Envelope { data } => data,
        }
    }
}

impl ApiRequest for CreateOrderRequest {
    type Response = OrderPlaced;
    const PATH: &'static str = "/orders";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: BodyEncoding = BodyEncoding::Json;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListOrdersRequest;

impl ApiRequest for ListOrdersRequest {
    type Response = Vec<Order>;
    const PATH: &'static str = "/orders";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: BodyEncoding = BodyEncoding::None;
}

impl ApiRequest for StockChangeRequest {
    type Response = StockUpdated;
    const PATH: &'static str = "/stock";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: BodyEncoding = BodyEncoding::Json;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListStockLogsRequest;

impl ApiRequest for ListStockLogsRequest {
    type Response = Vec<StockLogEntry>;
    const PATH: &'static str = "/stock/logs";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: BodyEncoding = BodyEncoding::None;
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str = r#"{"id":1,"name":"Red Shoe","brand":"Acme","category":"Shoes","price":4500,"quantity":12,"status":"active"}"#;

    #[test]
    fn test_product_list_accepts_bare_array() {
        let list: ProductList = serde_json::from_str(&format!("[{PRODUCT}]")).unwrap();
        assert_eq!(list.into_products().len(), 1);
    }

    #[test]
    fn test_product_list_accepts_envelope() {
        let list: ProductList = serde_json::from_str(&format!(r#"{{"data":[{PRODUCT}]}}"#)).unwrap();
        let products = list.into_products();
        assert_eq!(products[0].brand, "Acme");
    }

    #[test]
    fn test_product_list_rejects_other_shapes() {
        assert!(serde_json::from_str::<ProductList>(r#"{"items":[]}"#).is_err());
        assert!(serde_json::from_str::<ProductList>(r#""nope""#).is_err());
        assert!(serde_json::from_str::<ProductList>("null").is_err());
    }

    #[test]
    fn test_register_response_is_ignored() {
        assert!(serde_json::from_str::<IgnoredAny>(r#"{"msg":"registered"}"#).is_ok());
        assert!(serde_json::from_str::<IgnoredAny>("null").is_ok());
    }

    #[test]
    fn test_endpoint_metadata() {
        assert!(!LoginRequest::AUTHORIZED);
        assert!(!RegisterRequest::AUTHORIZED);
        assert!(RegisterRequest::IGNORE_BODY);
        assert!(!LoginRequest::IGNORE_BODY);
        assert!(ListStockLogsRequest::AUTHORIZED);
        assert_eq!(LoginRequest::ENCODING, BodyEncoding::Form);
        assert_eq!(StockChangeRequest::PATH, "/stock");
        assert_eq!(ListStockLogsRequest::METHOD, HttpMethod::Get);
    }

    #[test]
    fn test_credentials_wrappers_serialize_flat() {
        let creds = Credentials {
            username: "test".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(RegisterRequest(creds)).unwrap();
        assert_eq!(json, serde_json::json!({"username": "test", "password": "secret"}));
    }
}
