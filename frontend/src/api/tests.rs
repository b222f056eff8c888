use super::mock::{BASE_URL, MockTransport, anonymous_api, mock_api};
use super::*;
use serde_json::json;

fn product_json(id: i64, name: &str, brand: &str, category: &str) -> serde_json::Value {
    json!({
        "id": id, "name": name, "brand": brand, "category": category,
        "price": 4500, "quantity": 10, "status": "active"
    })
}

// =========================================================
// 请求构建
// =========================================================

#[tokio::test]
async fn test_authorized_request_carries_bearer_token() {
    let api = mock_api();
    api.transport().mock_response(
        HttpMethod::Get,
        "/dashboard/summary",
        200,
        json!({"total_products": 3, "active_products": 2, "total_orders": 1, "total_sales": 500}),
    );

    let summary = api.dashboard_summary().await.unwrap();
    assert_eq!(summary.total_orders, 1);

    let req = api.transport().last_request().unwrap();
    assert_eq!(req.url, format!("{BASE_URL}/dashboard/summary"));
    assert_eq!(req.header("Authorization"), Some("Bearer header.payload.signature"));
    assert_eq!(req.body, None);
}

#[tokio::test]
async fn test_without_token_no_authorization_header() {
    let api = ShopApi::new(BASE_URL, None, MockTransport::new());
    api.transport()
        .mock_response(HttpMethod::Get, "/orders", 401, json!({"detail": "Not authenticated"}));

    let err = api.orders().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            detail: Some("Not authenticated".into())
        }
    );
    assert_eq!(api.transport().last_request().unwrap().header("Authorization"), None);
}

#[tokio::test]
async fn test_login_is_form_encoded_and_unauthorized() {
    // 即便持有 Token，登录请求也不携带
    let api = mock_api();
    api.transport().mock_response(
        HttpMethod::Post,
        "/login",
        200,
        json!({"access_token": "abc", "token_type": "bearer"}),
    );

    let res = api
        .login(Credentials {
            username: "shop owner".into(),
            password: "p&ss=1".into(),
        })
        .await
        .unwrap();
    assert_eq!(res.access_token, "abc");

    let req = api.transport().last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.header("Authorization"), None);
    assert_eq!(req.header("Content-Type"), Some("application/x-www-form-urlencoded"));
    let body = req.body.unwrap();
    assert!(body.contains("username=shop%20owner"));
    assert!(body.contains("password=p%26ss%3D1"));
}

#[tokio::test]
async fn test_register_accepts_any_body() {
    let api = anonymous_api();
    api.transport().mock_raw(HttpMethod::Post, "/register", 200, "");
    assert!(
        api.register(Credentials {
            username: "new".into(),
            password: "abc".into()
        })
        .await
        .is_ok()
    );

    let req = api.transport().last_request().unwrap();
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"username": "new", "password": "abc"}));
}

#[tokio::test]
async fn test_register_ignores_plain_text_body() {
    let api = anonymous_api();
    api.transport().mock_raw(HttpMethod::Post, "/register", 201, "registered");
    let credentials = Credentials {
        username: "new".into(),
        password: "abc".into(),
    };
    assert!(api.register(credentials).await.is_ok());

    let api = anonymous_api();
    api.transport().mock_raw(HttpMethod::Post, "/register", 409, "already taken");
    let credentials = Credentials {
        username: "new".into(),
        password: "abc".into(),
    };
    assert!(matches!(
        api.register(credentials).await,
        Err(ApiError::Status { status: 409, detail: None })
    ));
}

#[tokio::test]
async fn test_stock_change_json_body() {
    let api = mock_api();
    api.transport()
        .mock_response(HttpMethod::Post, "/stock", 200, json!({"message": "Stock updated", "new_quantity": 10}));

    let updated = api
        .update_stock(&StockChangeRequest {
            product_id: 3,
            amount: -5,
            reason: "Damage".into(),
        })
        .await
        .unwrap();
    assert_eq!(updated.new_quantity, 10);

    let body = api.transport().last_request().unwrap().body.unwrap();
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({"product_id": 3, "amount": -5, "reason": "Damage"}));
}

// =========================================================
// 响应解析
// =========================================================

#[tokio::test]
async fn test_products_accepts_both_shapes() {
    let api = mock_api();
    api.transport().mock_response(
        HttpMethod::Get,
        "/products",
        200,
        json!([product_json(1, "Red Shoe", "Acme", "Shoes")]),
    );
    api.transport().mock_response(
        HttpMethod::Get,
        "/products",
        200,
        json!({"data": [product_json(2, "Dell XPS 13", "Dell", "Laptop")]}),
    );

    assert_eq!(api.products().await.unwrap()[0].id, 1);
    assert_eq!(api.products().await.unwrap()[0].id, 2);
}

#[tokio::test]
async fn test_unexpected_product_shape_is_parse_failure() {
    let api = mock_api();
    api.transport()
        .mock_response(HttpMethod::Get, "/products", 200, json!({"items": []}));

    assert!(matches!(api.products().await, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_validation_detail_list_uses_first_msg() {
    let api = mock_api();
    api.transport().mock_response(
        HttpMethod::Post,
        "/orders",
        422,
        json!({"detail": [{"loc": ["body", "items"], "msg": "field required", "type": "value_error"}]}),
    );

    let err = api
        .place_order(&CreateOrderRequest::single(1, 2))
        .await
        .unwrap_err();
    assert_eq!(err.detail(), Some("field required"));
}

#[tokio::test]
async fn test_non_json_error_has_no_detail() {
    let api = mock_api();
    api.transport()
        .mock_raw(HttpMethod::Get, "/stock/logs", 502, "Bad Gateway");

    let err = api.stock_logs().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 502,
            detail: None
        }
    );
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let api = mock_api();
    api.transport().mock_network_error(HttpMethod::Get, "/orders");

    assert!(matches!(api.orders().await, Err(ApiError::Transport(_))));
}
