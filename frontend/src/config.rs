//! 运行配置
//!
//! 默认值 + 构建时环境变量覆盖（`SHOPHUB_API_URL`）。

/// 未配置时使用的后端地址
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 后端 REST API 根地址（不含结尾的 `/`）
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base_url }
    }

    /// 读取构建时注入的 `SHOPHUB_API_URL`，读不到就用默认值
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SHOPHUB_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(AppConfig::new("https://shop.example.com/").api_base_url, "https://shop.example.com");
    }

    #[test]
    fn test_blank_override_falls_back_to_default() {
        assert_eq!(AppConfig::new("   ").api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(AppConfig::default().api_base_url, DEFAULT_API_BASE_URL);
    }
}
