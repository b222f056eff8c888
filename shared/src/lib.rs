use serde::{Deserialize, Serialize};

pub mod date;
pub mod filter;
pub mod protocol;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 浏览器存储中唯一持久化的键：Bearer Token
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Token 无法解析时显示的用户名
pub const DEFAULT_DISPLAY_NAME: &str = "User";
/// 分类过滤器中 "全部" 的取值
pub const CATEGORY_ALL: &str = "all";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    OutOfStock,
    /// 后端新增的未知状态
    #[serde(other)]
    Unknown,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::OutOfStock => "out_of_stock",
            ProductStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub status: ProductStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: i64,
    pub qty: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user: String,
    pub total: f64,
    pub created_at: Timestamp,
    // 列表接口不返回明细
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

/// 库存变更日志（只追加）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLogEntry {
    pub id: i64,
    pub product_id: i64,
    pub change: i64,
    pub reason: String,
    pub created_at: Timestamp,
}

/// 服务端聚合的仪表盘快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardSummary {
    pub total_products: u64,
    pub active_products: u64,
    pub total_orders: u64,
    pub total_sales: f64,
}

impl DashboardSummary {
    /// 以 "十万" (lakh) 为单位展示销售额，如 `₹12.5L+`
    pub fn sales_in_lakhs(&self) -> String {
        format!("₹{:.1}L+", self.total_sales / 100_000.0)
    }
}

// =========================================================
// 请求 / 响应体 (Wire Bodies)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLine>,
}

impl CreateOrderRequest {
    /// 单商品订单
    pub fn single(product_id: i64, qty: i64) -> Self {
        Self {
            items: vec![OrderLine { product_id, qty }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub order_id: i64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChangeRequest {
    pub product_id: i64,
    pub amount: i64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdated {
    pub new_quantity: i64,
    #[serde(default)]
    pub message: Option<String>,
}

// =========================================================
// 展示辅助 (Display Helpers)
// =========================================================

/// 格式化金额：`₹` + 千分位整数部分，仅在有小数时保留两位
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let abs = value.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;
    // 四舍五入进位
    let (whole, cents) = if cents >= 100 { (whole + 1, 0) } else { (whole, cents) };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if cents == 0 {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{cents:02}")
    }
}
