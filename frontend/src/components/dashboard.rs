use crate::api::{AppApi, ShopApi};
use crate::auth::use_session;
use crate::components::orders::OrdersPanel;
use crate::components::products::ProductsPanel;
use crate::components::stock::StockPanel;
use crate::config::AppConfig;
use crate::controllers::Feedback;
use crate::controllers::dashboard::SummaryController;
use crate::session::display_name;
use crate::web::FetchTransport;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 从 Context 获取已认证的 API 客户端
pub fn use_api() -> AppApi {
    use_context::<AppApi>().expect("AppApi should be provided by DashboardPage")
}

/// 成功 / 失败提示条
#[component]
pub fn FeedbackAlert(feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    view! {
        <Show when=move || feedback.get().is_some()>
            <div role="alert" class=move || {
                if feedback.get().is_some_and(|f| f.is_error()) {
                    "alert alert-error text-sm py-2"
                } else {
                    "alert alert-success text-sm py-2"
                }
            }>
                <span>{move || feedback.get().map(|f| f.message().to_string()).unwrap_or_default()}</span>
                <button class="btn btn-ghost btn-xs" on:click=move |_| feedback.set(None)>"✕"</button>
            </div>
        </Show>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let config = use_context::<AppConfig>().unwrap_or_default();

    // 分支挂载时用当前 Token 构建客户端；注销会卸载整个分支
    let api: AppApi = ShopApi::new(&config.api_base_url, session.token(), FetchTransport);
    provide_context(api.clone());

    let user = display_name(&session.session().get_untracked());
    let summary = SummaryController::new(api);

    let refresh = {
        let summary = summary.clone();
        move || {
            let summary = summary.clone();
            spawn_local(async move { summary.refresh_summary().await });
        }
    };
    refresh();

    let stat = {
        let summary = summary.clone();
        move |pick: fn(&shophub_shared::DashboardSummary) -> String| {
            let summary = summary.clone();
            move || summary.summary().as_ref().map(pick).unwrap_or_else(|| "-".to_string())
        }
    };
    let refreshing = move || summary.is_refreshing();
    let refreshing_label = refreshing.clone();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <a class="btn btn-ghost text-xl">"ShopHub Pro"</a>
                    </div>
                    <div class="flex-none gap-2">
                        <span class="badge badge-neutral">{user}</span>
                        <button on:click=move |_| session.logout() class="btn btn-outline btn-error gap-2">
                            "Logout"
                        </button>
                    </div>
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"Total Products"</div>
                        <div class="stat-value text-primary">{stat(|s| s.total_products.to_string())}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Active Products"</div>
                        <div class="stat-value text-success">{stat(|s| s.active_products.to_string())}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Total Orders"</div>
                        <div class="stat-value">{stat(|s| s.total_orders.to_string())}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Total Sales"</div>
                        <div class="stat-value text-secondary">{stat(|s| s.sales_in_lakhs())}</div>
                        <div class="stat-actions">
                            <button
                                class="btn btn-sm btn-ghost"
                                on:click=move |_| refresh()
                                disabled=refreshing.clone()
                            >
                                {move || if refreshing_label() { "Refreshing..." } else { "Refresh" }}
                            </button>
                        </div>
                    </div>
                </div>

                <ProductsPanel />
                <div class="grid gap-8 lg:grid-cols-2">
                    <OrdersPanel />
                    <StockPanel />
                </div>
            </div>
        </div>
    }
}
