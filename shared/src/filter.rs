//! 商品过滤模块
//!
//! 纯函数、同步计算，不触发任何网络请求。

use crate::{CATEGORY_ALL, Product};

/// 分类过滤条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// 从 `<select>` 的取值解析，`"all"` 表示不过滤
    pub fn from_value(value: &str) -> Self {
        if value == CATEGORY_ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::All => CATEGORY_ALL,
            Self::Only(category) => category,
        }
    }

    fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// 商品视图的过滤状态（仅内存，不持久化）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.admits(&product.category) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.brand.to_lowercase().contains(&needle)
    }

    /// 保持原有顺序返回匹配的商品
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }

    /// 是否有任何条件在收窄结果集
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }
}

/// 当前集合中出现过的分类（去重，按首次出现顺序）
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductStatus;

    fn product(id: i64, name: &str, brand: &str, category: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            price: 1000.0,
            quantity: 5,
            status: ProductStatus::Active,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shoe", "Acme", "Shoes"),
            product(2, "Dell XPS 13", "Dell", "Laptop"),
            product(3, "Nike Air Max 90", "Nike", "Shoes"),
            product(4, "Hoodie - M", "Generic", "Clothes"),
        ]
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let products = catalog();
        let filter = ProductFilter::default();
        assert_eq!(filter.apply(&products), products);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_category_filter_selects_exact_subset() {
        let products = catalog();
        let filter = ProductFilter {
            category: CategoryFilter::Only("Shoes".into()),
            ..Default::default()
        };
        let shoes = filter.apply(&products);
        assert_eq!(shoes.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(shoes.iter().all(|p| p.category == "Shoes"));

        // 幂等
        assert_eq!(filter.apply(&shoes), shoes);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_or_brand() {
        let products = vec![product(1, "Red Shoe", "Acme", "Shoes")];

        let by_name = ProductFilter {
            search: "red".into(),
            ..Default::default()
        };
        let by_brand = ProductFilter {
            search: "ACME".into(),
            ..Default::default()
        };
        let miss = ProductFilter {
            search: "blue".into(),
            ..Default::default()
        };

        assert_eq!(by_name.apply(&products).len(), 1);
        assert_eq!(by_brand.apply(&products).len(), 1);
        assert!(miss.apply(&products).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let filter = ProductFilter {
            search: "nike".into(),
            category: CategoryFilter::Only("Laptop".into()),
        };
        assert!(filter.apply(&catalog()).is_empty());
        assert!(filter.is_active());
    }

    #[test]
    fn test_category_value_round_trip() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value("Shoes").as_value(), "Shoes");
        assert_eq!(CategoryFilter::All.as_value(), CATEGORY_ALL);
    }

    #[test]
    fn test_categories_distinct_in_first_seen_order() {
        assert_eq!(categories(&catalog()), vec!["Shoes", "Laptop", "Clothes"]);
        assert!(categories(&[]).is_empty());
    }
}
