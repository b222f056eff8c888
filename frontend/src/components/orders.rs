use crate::components::dashboard::{FeedbackAlert, use_api};
use crate::controllers::orders::OrdersController;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shophub_shared::format_amount;

#[component]
pub fn OrdersPanel() -> impl IntoView {
    let orders = OrdersController::new(use_api());
    let state = orders.state;
    let form = orders.form;
    let submitting = orders.submitting;
    let feedback = orders.feedback;

    {
        let orders = orders.clone();
        spawn_local(async move { orders.open().await });
    }

    let on_submit = {
        let orders = orders.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let orders = orders.clone();
            spawn_local(async move { orders.place_order().await });
        }
    };
    let on_toggle = move |_| {
        let orders = orders.clone();
        spawn_local(async move { orders.toggle().await });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Place Order"</h3>
                <FeedbackAlert feedback=feedback />

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <input
                            type="number"
                            placeholder="Product ID"
                            class="input input-bordered w-full"
                            prop:value=form.product_id
                            on:input=move |ev| form.product_id.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            placeholder="Quantity"
                            class="input input-bordered w-full"
                            prop:value=form.quantity
                            on:input=move |ev| form.quantity.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary w-full" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Placing..." } else { "Place Order" }}
                    </button>
                </form>

                <div class="divider"></div>
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Orders"</h3>
                    <button class="btn btn-ghost btn-sm" on:click=on_toggle>
                        {move || if state.with(|s| s.shown) { "Hide" } else { "Show" }}
                    </button>
                </div>

                <Show when=move || state.with(|s| s.shown)>
                    <Show when=move || state.with(|s| s.error.is_some())>
                        <div role="alert" class="alert alert-warning text-sm py-2">
                            <span>{move || state.with(|s| s.error.clone().unwrap_or_default())}</span>
                        </div>
                    </Show>
                    <Show when=move || state.with(|s| s.is_loading() && s.items.is_empty())>
                        <span class="loading loading-spinner loading-md"></span>
                    </Show>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"User"</th>
                                <th>"Total"</th>
                                <th>"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|o| o.id
                                children=move |order| {
                                    view! {
                                        <tr>
                                            <td class="font-mono">"#" {order.id}</td>
                                            <td>{order.user}</td>
                                            <td>{format_amount(order.total)}</td>
                                            <td class="text-xs opacity-70">{order.created_at.to_string()}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}
