//! 订单：下单 + 订单列表

use leptos::prelude::*;
use shophub_shared::{CreateOrderRequest, Order, format_amount};

use super::{Feedback, fetch_into, parse_int, required};
use crate::api::{ShopApi, Transport};
use crate::error::FormError;
use crate::sync::ResourceState;

/// 下单表单
///
/// 输入框原样保存字符串，提交时才解析。
#[derive(Clone, Copy)]
pub struct OrderForm {
    pub product_id: RwSignal<String>,
    pub quantity: RwSignal<String>,
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            product_id: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.product_id.set(String::new());
        self.quantity.set(String::new());
    }

    pub fn to_request(&self) -> Result<CreateOrderRequest, FormError> {
        let product_id = self.product_id.get_untracked();
        let quantity = self.quantity.get_untracked();
        let product_id = required(&product_id)?;
        let quantity = required(&quantity)?;

        Ok(CreateOrderRequest::single(
            parse_int(product_id, "Product ID")?,
            parse_int(quantity, "Quantity")?,
        ))
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OrdersController<T: Transport> {
    api: ShopApi<T>,
    pub state: RwSignal<ResourceState<Order>>,
    pub form: OrderForm,
    pub feedback: RwSignal<Option<Feedback>>,
    pub submitting: RwSignal<bool>,
}

impl<T: Transport> Clone for OrdersController<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state,
            form: self.form,
            feedback: self.feedback,
            submitting: self.submitting,
        }
    }
}

impl<T: Transport> OrdersController<T> {
    pub fn new(api: ShopApi<T>) -> Self {
        Self {
            api,
            state: RwSignal::new(ResourceState::new()),
            form: OrderForm::new(),
            feedback: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub async fn load(&self) {
        fetch_into(self.state, "Orders", "Failed to load orders", self.api.orders()).await;
    }

    /// 面板挂载：显示并加载
    pub async fn open(&self) {
        self.state.update(|s| s.show());
        self.load().await;
    }

    /// 隐藏 -> 显示时重新加载；显示 -> 隐藏只改可见性
    pub async fn toggle(&self) {
        let Some(shown) = self.state.try_update(|s| s.toggle_shown()) else {
            return;
        };
        if shown {
            self.load().await;
        }
    }

    pub async fn place_order(&self) {
        if self.submitting.get_untracked() {
            return;
        }

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };

        self.submitting.set(true);
        self.feedback.set(None);

        match self.api.place_order(&request).await {
            Ok(placed) => {
                log_info!("[Orders] Order #{} placed", placed.order_id);
                self.feedback.set(Some(Feedback::Success(format!(
                    "Order #{} placed! Total: {}",
                    placed.order_id,
                    format_amount(placed.total)
                ))));
                self.form.reset();
                self.state.update(|s| s.show());
                self.load().await;
            }
            Err(e) => {
                log_error!("[Orders] Failed to place order: {}", e);
                self.feedback
                    .set(Some(Feedback::Error(e.user_message("Failed to place order"))));
            }
        }

        self.submitting.set(false);
    }
}
