use crate::components::dashboard::use_api;
use crate::controllers::products::ProductsController;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shophub_shared::{CATEGORY_ALL, format_amount};

#[component]
pub fn ProductsPanel() -> impl IntoView {
    let products = ProductsController::new(use_api());
    let state = products.state;
    let filter = products.filter;

    let reload = {
        let products = products.clone();
        move || {
            let products = products.clone();
            spawn_local(async move { products.load().await });
        }
    };
    reload();

    let on_search = {
        let products = products.clone();
        move |ev| products.set_search(event_target_value(&ev))
    };
    let on_category = {
        let products = products.clone();
        move |ev| products.set_category(&event_target_value(&ev))
    };
    let stats = {
        let products = products.clone();
        move || products.stats_line()
    };
    let categories = {
        let products = products.clone();
        move || products.categories()
    };
    let visible = move || products.visible();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Products"</h3>
                    <button
                        class="btn btn-ghost btn-sm"
                        on:click=move |_| reload()
                        disabled=move || state.with(|s| s.is_loading())
                    >
                        {move || if state.with(|s| s.is_loading()) { "Loading..." } else { "Reload" }}
                    </button>
                </div>

                <div class="flex flex-col md:flex-row gap-4">
                    <input
                        type="text"
                        placeholder="Search by name or brand"
                        class="input input-bordered flex-1"
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=on_search
                    />
                    <select class="select select-bordered" on:change=on_category>
                        <option value=CATEGORY_ALL selected=move || filter.with(|f| f.category.as_value() == CATEGORY_ALL)>
                            "All Categories"
                        </option>
                        <For
                            each=categories
                            key=|c| c.clone()
                            children=move |category| {
                                let value = category.clone();
                                let label = category.clone();
                                view! {
                                    <option
                                        value=category
                                        selected=move || filter.with(|f| f.category.as_value() == value)
                                    >
                                        {label}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <p class="text-sm text-base-content/70">{stats}</p>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <div role="alert" class="alert alert-warning text-sm py-2">
                        <span>{move || state.with(|s| s.error.clone().unwrap_or_default())}</span>
                    </div>
                </Show>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Brand"</th>
                                <th>"Category"</th>
                                <th>"Price"</th>
                                <th>"Stock"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|p| p.id
                                children=move |product| {
                                    view! {
                                        <tr>
                                            <td class="font-mono text-xs">{product.id}</td>
                                            <td class="font-bold">{product.name}</td>
                                            <td>{product.brand}</td>
                                            <td><div class="badge badge-outline">{product.category}</div></td>
                                            <td>{format_amount(product.price)}</td>
                                            <td>{product.quantity}</td>
                                            <td>{product.status.as_str()}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
