//! 库存：增减库存 + 变更日志

use leptos::prelude::*;
use shophub_shared::{StockChangeRequest, StockLogEntry};

use super::{Feedback, fetch_into, parse_int, required};
use crate::api::{ShopApi, Transport};
use crate::error::FormError;
use crate::sync::ResourceState;

#[derive(Clone, Copy)]
pub struct StockForm {
    pub product_id: RwSignal<String>,
    /// 可为负数（出库）
    pub amount: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl StockForm {
    pub fn new() -> Self {
        Self {
            product_id: RwSignal::new(String::new()),
            amount: RwSignal::new(String::new()),
            reason: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.product_id.set(String::new());
        self.amount.set(String::new());
        self.reason.set(String::new());
    }

    pub fn to_request(&self) -> Result<StockChangeRequest, FormError> {
        let product_id = self.product_id.get_untracked();
        let amount = self.amount.get_untracked();
        let reason = self.reason.get_untracked();
        let product_id = required(&product_id)?;
        let amount = required(&amount)?;
        required(&reason)?;

        Ok(StockChangeRequest {
            product_id: parse_int(product_id, "Product ID")?,
            amount: parse_int(amount, "Amount")?,
            reason,
        })
    }
}

impl Default for StockForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct StockController<T: Transport> {
    api: ShopApi<T>,
    pub logs: RwSignal<ResourceState<StockLogEntry>>,
    pub form: StockForm,
    pub feedback: RwSignal<Option<Feedback>>,
    pub submitting: RwSignal<bool>,
}

impl<T: Transport> Clone for StockController<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            logs: self.logs,
            form: self.form,
            feedback: self.feedback,
            submitting: self.submitting,
        }
    }
}

impl<T: Transport> StockController<T> {
    pub fn new(api: ShopApi<T>) -> Self {
        Self {
            api,
            logs: RwSignal::new(ResourceState::new()),
            form: StockForm::new(),
            feedback: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub async fn load(&self) {
        fetch_into(self.logs, "Stock", "Failed to load stock logs", self.api.stock_logs()).await;
    }

    pub async fn open(&self) {
        self.logs.update(|s| s.show());
        self.load().await;
    }

    pub async fn toggle(&self) {
        let Some(shown) = self.logs.try_update(|s| s.toggle_shown()) else {
            return;
        };
        if shown {
            self.load().await;
        }
    }

    pub async fn update_stock(&self) {
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

        match self.api.update_stock(&request).await {
            Ok(updated) => {
                log_info!(
                    "[Stock] Product {} changed by {}, now {}",
                    request.product_id,
                    request.amount,
                    updated.new_quantity
                );
                self.feedback.set(Some(Feedback::Success(format!(
                    "Stock updated! New quantity: {}",
                    updated.new_quantity
                ))));
                self.form.reset();
                self.logs.update(|s| s.show());
                self.load().await;
            }
            Err(e) => {
                log_error!("[Stock] Failed to update stock: {}", e);
                self.feedback
                    .set(Some(Feedback::Error(e.user_message("Failed to update stock"))));
            }
        }

        self.submitting.set(false);
    }
}
