use crate::components::dashboard::{FeedbackAlert, use_api};
use crate::controllers::stock::StockController;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn StockPanel() -> impl IntoView {
    let stock = StockController::new(use_api());
    let logs = stock.logs;
    let form = stock.form;
    let submitting = stock.submitting;
    let feedback = stock.feedback;

    {
        let stock = stock.clone();
        spawn_local(async move { stock.open().await });
    }

    let on_submit = {
        let stock = stock.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let stock = stock.clone();
            spawn_local(async move { stock.update_stock().await });
        }
    };
    let on_toggle = move |_| {
        let stock = stock.clone();
        spawn_local(async move { stock.toggle().await });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Update Stock"</h3>
                <p class="text-sm text-base-content/70">"Use a negative amount to remove stock."</p>
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
                            placeholder="Amount (+/-)"
                            class="input input-bordered w-full"
                            prop:value=form.amount
                            on:input=move |ev| form.amount.set(event_target_value(&ev))
                        />
                    </div>
                    <input
                        type="text"
                        placeholder="Reason (e.g. Restock, Damage)"
                        class="input input-bordered w-full"
                        prop:value=form.reason
                        on:input=move |ev| form.reason.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-secondary w-full" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Updating..." } else { "Update Stock" }}
                    </button>
                </form>

                <div class="divider"></div>
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Stock Logs"</h3>
                    <button class="btn btn-ghost btn-sm" on:click=on_toggle>
                        {move || if logs.with(|s| s.shown) { "Hide" } else { "Show" }}
                    </button>
                </div>

                <Show when=move || logs.with(|s| s.shown)>
                    <Show when=move || logs.with(|s| s.error.is_some())>
                        <div role="alert" class="alert alert-warning text-sm py-2">
                            <span>{move || logs.with(|s| s.error.clone().unwrap_or_default())}</span>
                        </div>
                    </Show>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th>"Change"</th>
                                <th>"Reason"</th>
                                <th>"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || logs.with(|s| s.items.clone())
                                key=|entry| entry.id
                                children=move |entry| {
                                    let change_class = if entry.change < 0 { "text-error font-bold" } else { "text-success font-bold" };
                                    let change = if entry.change > 0 { format!("+{}", entry.change) } else { entry.change.to_string() };
                                    view! {
                                        <tr>
                                            <td class="font-mono">"#" {entry.product_id}</td>
                                            <td class=change_class>{change}</td>
                                            <td>{entry.reason}</td>
                                            <td class="text-xs opacity-70">{entry.created_at.to_string()}</td>
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
