//! 商品目录：只读列表 + 本地过滤

use leptos::prelude::*;
use shophub_shared::Product;
use shophub_shared::filter::{CategoryFilter, ProductFilter, categories};

use super::fetch_into;
use crate::api::{ShopApi, Transport};
use crate::sync::ResourceState;

pub struct ProductsController<T: Transport> {
    api: ShopApi<T>,
    pub state: RwSignal<ResourceState<Product>>,
    pub filter: RwSignal<ProductFilter>,
}

impl<T: Transport> Clone for ProductsController<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state,
            filter: self.filter,
        }
    }
}

impl<T: Transport> ProductsController<T> {
    pub fn new(api: ShopApi<T>) -> Self {
        Self {
            api,
            state: RwSignal::new(ResourceState::new()),
            filter: RwSignal::new(ProductFilter::default()),
        }
    }

    pub async fn load(&self) {
        fetch_into(self.state, "Products", "Failed to load products", self.api.products()).await;
    }

    pub fn set_search(&self, search: String) {
        self.filter.update(|f| f.search = search);
    }

    pub fn set_category(&self, value: &str) {
        let category = CategoryFilter::from_value(value);
        self.filter.update(|f| f.category = category);
    }

    /// 过滤后的商品（响应式）
    pub fn visible(&self) -> Vec<Product> {
        let filter = self.filter.get();
        self.state.with(|s| filter.apply(&s.items))
    }

    /// 分类下拉框的选项（响应式）
    pub fn categories(&self) -> Vec<String> {
        self.state.with(|s| categories(&s.items))
    }

    /// 例如 `Showing 3 of 40 products • Category: Laptop • Search: "dell"`
    pub fn stats_line(&self) -> String {
        let filter = self.filter.get();
        let (shown, total) = self
            .state
            .with(|s| (s.items.iter().filter(|p| filter.matches(p)).count(), s.items.len()));

        let mut line = format!("Showing {shown} of {total} products");
        if !filter.is_active() {
            return line;
        }
        if let CategoryFilter::Only(category) = &filter.category {
            line.push_str(&format!(" • Category: {category}"));
        }
        if !filter.search.is_empty() {
            line.push_str(&format!(" • Search: \"{}\"", filter.search));
        }
        line
    }
}
