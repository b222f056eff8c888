use crate::api::ShopApi;
use crate::auth::use_session;
use crate::config::AppConfig;
use crate::controllers::auth_flow::{AuthFlow, AuthMode};
use crate::web::FetchTransport;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let flow = AuthFlow::new(
        ShopApi::new(&config.api_base_url, None, FetchTransport),
        session,
    );

    let form = flow.form;
    let mode = flow.mode;
    let error = flow.error;
    let notice = flow.notice;
    let pending = flow.pending;

    let on_submit = {
        let flow = flow.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let flow = flow.clone();
            spawn_local(async move { flow.submit().await });
        }
    };

    let on_toggle_mode = {
        let flow = flow.clone();
        move |_| flow.toggle_mode()
    };

    // 任何输入都会清除上一次的错误
    let on_username = {
        let flow = flow.clone();
        move |ev| {
            form.username.set(event_target_value(&ev));
            flow.clear_error();
        }
    };
    let on_password = move |ev| {
        form.password.set(event_target_value(&ev));
        flow.clear_error();
    };

    let is_register = move || mode.get() == AuthMode::Register;

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"ShopHub Pro"</h1>
                    <p class="text-base-content/70">
                        "Professional E-Commerce Admin Dashboard"
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="card-title">
                            {move || if is_register() { "Create Account" } else { "Welcome Back" }}
                        </h2>

                        <Show when=move || error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <Show when=move || notice.get().is_some()>
                            <div role="status" class="alert alert-success text-sm py-2">
                                <span>{move || notice.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="Enter username"
                                on:input=on_username
                                prop:value=form.username
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=on_password
                                prop:value=form.password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || pending.get()>
                                {move || match (pending.get(), is_register()) {
                                    (true, _) => view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any(),
                                    (false, true) => "Create Account".into_any(),
                                    (false, false) => "Sign In".into_any(),
                                }}
                            </button>
                        </div>
                        <button type="button" class="btn btn-link btn-sm" on:click=on_toggle_mode>
                            {move || if is_register() {
                                "Already have an account? Sign in"
                            } else {
                                "Don't have an account? Register"
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
