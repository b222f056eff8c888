//! 仪表盘汇总
//!
//! 刷新期间保留上一份快照；失败只记日志，不向用户展示错误，也不重试。

use leptos::prelude::*;
use shophub_shared::DashboardSummary;

use crate::api::{ShopApi, Transport};
use crate::sync::FetchSequence;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryState {
    pub summary: Option<DashboardSummary>,
    seq: FetchSequence,
}

impl SummaryState {
    /// 最新一次刷新尚未完成
    pub fn is_refreshing(&self) -> bool {
        self.seq.is_pending()
    }
}

pub struct SummaryController<T: Transport> {
    api: ShopApi<T>,
    pub state: RwSignal<SummaryState>,
}

impl<T: Transport> Clone for SummaryController<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state,
        }
    }
}

impl<T: Transport> SummaryController<T> {
    pub fn new(api: ShopApi<T>) -> Self {
        Self {
            api,
            state: RwSignal::new(SummaryState::default()),
        }
    }

    pub async fn refresh_summary(&self) {
        let Some(ticket) = self.state.try_update(|s| s.seq.issue()) else {
            return;
        };

        let result = self.api.dashboard_summary().await;

        self.state.try_update(|s| {
            if !s.seq.accept(ticket) {
                log_info!("[Dashboard] Discarded stale summary");
                return;
            }
            match result {
                Ok(summary) => s.summary = Some(summary),
                Err(e) => log_error!("[Dashboard] Failed to refresh summary: {}", e),
            }
        });
    }

    /// 最新一次刷新尚未完成（响应式）
    pub fn is_refreshing(&self) -> bool {
        self.state.with(SummaryState::is_refreshing)
    }

    /// 最近一次成功刷新的快照（响应式）
    pub fn summary(&self) -> Option<DashboardSummary> {
        self.state.with(|s| s.summary.clone())
    }
}
